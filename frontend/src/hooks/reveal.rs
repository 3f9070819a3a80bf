use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::dom::VisibilityObserver;
use crate::observer::Subject;

/// Animate-once trigger: flips to revealed on the first visible report and
/// ignores everything after that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// True only for the report that does the revealing.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Whether the element behind `node` has entered the viewport at least once.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let visible = Subject::<bool>::new();
                let latch = Rc::new(RefCell::new(RevealLatch::default()));

                let subscription = {
                    let revealed = revealed.clone();
                    visible.subscribe(move |is_visible| {
                        if latch.borrow_mut().observe(*is_visible) {
                            revealed.set(true);
                        }
                    })
                };

                let observer = node
                    .cast::<Element>()
                    .and_then(|element| VisibilityObserver::observe(&element, visible, true));
                if observer.is_none() {
                    // Without an observer nothing would ever show up
                    revealed.set(true);
                }

                move || {
                    drop(observer);
                    drop(subscription);
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_visible_report_only() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());

        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // Scrolling out and back in does not fire again
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
    }

    #[test]
    fn latch_driven_through_a_subject() {
        let visible = Subject::<bool>::new();
        let latch = Rc::new(RefCell::new(RevealLatch::default()));
        let fired = Rc::new(RefCell::new(0));

        let subscription = {
            let latch = latch.clone();
            let fired = fired.clone();
            visible.subscribe(move |is_visible| {
                if latch.borrow_mut().observe(*is_visible) {
                    *fired.borrow_mut() += 1;
                }
            })
        };

        for report in [false, true, false, true, true] {
            visible.publish(report);
        }
        drop(subscription);
        visible.publish(true);

        assert_eq!(*fired.borrow(), 1);
        assert!(latch.borrow().is_revealed());
    }
}

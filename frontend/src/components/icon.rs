use yew::prelude::*;

/// Glyphs the page knows how to draw. Anything else falls back to [`Icon::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Menu,
    X,
    ArrowRight,
    Zap,
    Shield,
    Globe,
    Cpu,
    Layers,
    Sparkles,
    ChevronRight,
    Play,
    Star,
    CheckCircle2,
    ArrowUpRight,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::Zap;

    pub const ALL: [Icon; 14] = [
        Icon::Menu,
        Icon::X,
        Icon::ArrowRight,
        Icon::Zap,
        Icon::Shield,
        Icon::Globe,
        Icon::Cpu,
        Icon::Layers,
        Icon::Sparkles,
        Icon::ChevronRight,
        Icon::Play,
        Icon::Star,
        Icon::CheckCircle2,
        Icon::ArrowUpRight,
    ];

    pub fn resolve(name: &str) -> Icon {
        match name {
            "menu" => Icon::Menu,
            "x" => Icon::X,
            "arrow-right" => Icon::ArrowRight,
            "zap" => Icon::Zap,
            "shield" => Icon::Shield,
            "globe" => Icon::Globe,
            "cpu" => Icon::Cpu,
            "layers" => Icon::Layers,
            "sparkles" => Icon::Sparkles,
            "chevron-right" => Icon::ChevronRight,
            "play" => Icon::Play,
            "star" => Icon::Star,
            "check-circle-2" => Icon::CheckCircle2,
            "arrow-up-right" => Icon::ArrowUpRight,
            _ => Icon::DEFAULT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Menu => "menu",
            Icon::X => "x",
            Icon::ArrowRight => "arrow-right",
            Icon::Zap => "zap",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::Cpu => "cpu",
            Icon::Layers => "layers",
            Icon::Sparkles => "sparkles",
            Icon::ChevronRight => "chevron-right",
            Icon::Play => "play",
            Icon::Star => "star",
            Icon::CheckCircle2 => "check-circle-2",
            Icon::ArrowUpRight => "arrow-up-right",
        }
    }

    /// Stroke paths on a 24x24 grid.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
            ],
            Icon::Layers => &["M12 2 2 7l10 5 10-5-10-5z", "m2 17 10 5 10-5", "m2 12 10 5 10-5"],
            Icon::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::Play => &["M6 3 20 12 6 21 6 3z"],
            Icon::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Icon::CheckCircle2 => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "m9 12 2 2 4-4"],
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SafeIconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// Inline SVG glyph looked up by name. Unknown names draw the default glyph.
#[function_component(SafeIcon)]
pub fn safe_icon(props: &SafeIconProps) -> Html {
    let icon = Icon::resolve(&props.name);
    let stroke = props
        .color
        .clone()
        .unwrap_or_else(|| AttrValue::from("currentColor"));
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", format!("icon-{}", icon.name()), props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke={stroke}
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_their_glyph() {
        assert_eq!(Icon::resolve("menu"), Icon::Menu);
        assert_eq!(Icon::resolve("check-circle-2"), Icon::CheckCircle2);
        assert_eq!(Icon::resolve("arrow-up-right"), Icon::ArrowUpRight);
        for icon in Icon::ALL {
            assert_eq!(Icon::resolve(icon.name()), icon);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        for name in ["", "twitter", "Menu", "arrow_right", "check-circle", " globe"] {
            assert_eq!(Icon::resolve(name), Icon::DEFAULT, "name {:?}", name);
        }
        assert_eq!(Icon::DEFAULT, Icon::Zap);
    }

    #[test]
    fn every_glyph_has_paths() {
        for icon in Icon::ALL {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
        }
    }
}

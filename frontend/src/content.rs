//! Copy and imagery shown on the page.

use crate::page::anchor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient stops as `(from, to)` CSS colors.
    pub accent: (&'static str, &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const BRAND: &str = "Nexus";
pub const START_PROJECT: &str = "Начать проект";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Услуги", anchor: anchor::SERVICES },
    NavLink { label: "Портфолио", anchor: anchor::PORTFOLIO },
    NavLink { label: "О нас", anchor: anchor::ABOUT },
    NavLink { label: "Контакты", anchor: anchor::CONTACT },
];

pub const HERO_STATS: [HeroStat; 4] = [
    HeroStat { value: "150+", label: "Проектов" },
    HeroStat { value: "50+", label: "Клиентов" },
    HeroStat { value: "8+", label: "Лет опыта" },
    HeroStat { value: "99%", label: "Удовлетворенность" },
];

pub const SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        icon: "globe",
        title: "Веб-разработка",
        description: "Создаем современные веб-приложения с использованием передовых технологий React, Vue и Node.js",
        accent: ("#3b82f6", "#06b6d4"),
    },
    ServiceCard {
        icon: "cpu",
        title: "Мобильные приложения",
        description: "Разрабатываем нативные и кроссплатформенные приложения для iOS и Android",
        accent: ("#a855f7", "#ec4899"),
    },
    ServiceCard {
        icon: "layers",
        title: "UI/UX Дизайн",
        description: "Проектируем интуитивно понятные интерфейсы, которые пользователи любят",
        accent: ("#f97316", "#ef4444"),
    },
    ServiceCard {
        icon: "shield",
        title: "Кибербезопасность",
        description: "Обеспечиваем защиту данных и безопасность ваших цифровых активов",
        accent: ("#10b981", "#14b8a6"),
    },
];

pub const PORTFOLIO: [PortfolioItem; 3] = [
    PortfolioItem {
        title: "FinTech Platform",
        category: "Веб-приложение",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
    },
    PortfolioItem {
        title: "E-Commerce App",
        category: "Мобильное приложение",
        image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
    },
    PortfolioItem {
        title: "AI Dashboard",
        category: "SaaS платформа",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
    },
];

pub const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&q=80";

pub const ABOUT_CHECKLIST: [&str; 4] = [
    "Индивидуальный подход к каждому проекту",
    "Прозрачные процессы и коммуникация",
    "Гарантия качества и соблюдение сроков",
    "Поддержка и развитие после запуска",
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { label: "Email", value: "hello@nexus.agency", icon: "globe" },
    ContactChannel { label: "Телефон", value: "+7 (999) 123-45-67", icon: "zap" },
    ContactChannel { label: "Адрес", value: "Москва, ул. Цифровая, 42", icon: "shield" },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "twitter", href: "#" },
    SocialLink { name: "github", href: "#" },
    SocialLink { name: "linkedin", href: "#" },
];

pub const COPYRIGHT: &str = "© 2024 Nexus Agency. Все права защищены.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icon::Icon;

    #[test]
    fn lists_have_expected_sizes() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PORTFOLIO.len(), 3);
        assert_eq!(ABOUT_CHECKLIST.len(), 4);
        assert_eq!(CONTACT_CHANNELS.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(HERO_STATS.len(), 4);
    }

    #[test]
    fn nav_links_keep_source_order() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert_eq!(anchors, ["services", "portfolio", "about", "contact"]);
        assert_eq!(NAV_LINKS[1].label, "Портфолио");
        assert_eq!(NAV_LINKS[1].href(), "#portfolio");
    }

    #[test]
    fn content_icons_are_all_known_glyphs() {
        let names = SERVICES
            .iter()
            .map(|service| service.icon)
            .chain(CONTACT_CHANNELS.iter().map(|channel| channel.icon));
        for name in names {
            assert_eq!(Icon::resolve(name).name(), name);
        }
    }
}

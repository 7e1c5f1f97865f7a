//! Compiled-in portfolio content.
//!
//! Everything rendered by the sections lives here as fixed tables; nothing
//! is created, mutated or removed at runtime.

use crate::icons::Icon;

/// Host shown in every browser frame's address bar.
pub const SITE_HOST: &str = "portfolio.abhishek.dev";

/// Name shown in the hero section.
pub const DISPLAY_NAME: &str = "Abhishek R";

/// Profile picture shown next to the hero text.
pub const PROFILE_IMAGE: &str = "assets/profile.png";

/// Phrases cycled by the hero typewriter, in order.
pub const HERO_PHRASES: &[&str] = &[
    "Computer Science Student",
    "Web Developer",
    "Problem Solver",
    "Creative Thinker",
    "Tech Enthusiast",
];

/// Biography paragraphs for the about section.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate Computer Science student with a strong interest in web development. \
     My journey in programming began with a curiosity about how websites work, and since then, \
     I've been constantly learning and improving my skills in both frontend and backend development.",
    "I enjoy creating responsive and user-friendly web applications using modern technologies \
     like React, JavaScript, and various other tools in the web development ecosystem. \
     When I'm not coding, you can find me exploring new technologies, contributing to open-source \
     projects, or working on personal projects to enhance my skills.",
];

/// The page sections, each rendered inside its own browser frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Sections in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// DOM id of the section element, used as the scroll anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Path shown after the host in the frame's address bar.
    pub fn path(self) -> &'static str {
        match self {
            SectionId::Hero => "/",
            SectionId::About => "/about",
            SectionId::Projects => "/projects",
            SectionId::Skills => "/skills",
            SectionId::Contact => "/contact",
        }
    }

    /// Full address bar text, e.g. `portfolio.abhishek.dev/about`.
    pub fn address(self) -> String {
        format!("{}{}", SITE_HOST, self.path())
    }
}

/// A showcased project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub repository_url: &'static str,
    pub demo_url: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Project 1",
        short_description: "A brief description of project 1",
        full_description: "A detailed description of project 1, including technologies used and challenges faced.",
        repository_url: "https://github.com",
        demo_url: "https://project1.com",
        tags: &["React", "Node.js", "MongoDB"],
    },
    Project {
        id: 2,
        title: "Project 2",
        short_description: "A brief description of project 2",
        full_description: "A detailed description of project 2, including technologies used and challenges faced.",
        repository_url: "https://github.com",
        demo_url: "https://project2.com",
        tags: &["TypeScript", "Next.js", "PostgreSQL"],
    },
];

/// A skill with its proficiency percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", icon: Icon::React, level: 90 },
    Skill { name: "JavaScript", icon: Icon::JavaScript, level: 85 },
    Skill { name: "TypeScript", icon: Icon::TypeScript, level: 80 },
    Skill { name: "HTML5", icon: Icon::Html5, level: 95 },
    Skill { name: "CSS3", icon: Icon::Css3, level: 90 },
    Skill { name: "Node.js", icon: Icon::NodeJs, level: 85 },
    Skill { name: "Express", icon: Icon::Express, level: 80 },
    Skill { name: "MongoDB", icon: Icon::MongoDb, level: 75 },
    Skill { name: "Redux", icon: Icon::Redux, level: 80 },
    Skill { name: "Git", icon: Icon::Git, level: 85 },
    Skill { name: "Styled Components", icon: Icon::StyledComponents, level: 90 },
    Skill { name: "SQL", icon: Icon::Database, level: 75 },
];

/// Kind of outbound contact link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    GitHub,
    LinkedIn,
}

/// An outbound contact link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
    pub label: &'static str,
    /// Opens in a new window.
    pub external: bool,
}

impl ContactLink {
    pub fn icon(&self) -> Icon {
        match self.kind {
            ContactKind::Phone => Icon::Phone,
            ContactKind::Email => Icon::Envelope,
            ContactKind::GitHub => Icon::GitHub,
            ContactKind::LinkedIn => Icon::LinkedIn,
        }
    }
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Phone,
        href: "tel:+910000000000",
        label: "+91 00000 00000",
        external: false,
    },
    ContactLink {
        kind: ContactKind::Email,
        href: "mailto:hello@abhishek.dev?subject=Portfolio%20Inquiry&body=Hi%20Abhishek,%0A%0AI%20saw%20your%20portfolio%20and%20would%20like%20to%20connect%20with%20you.%0A%0ABest%20regards,",
        label: "hello@abhishek.dev",
        external: false,
    },
    ContactLink {
        kind: ContactKind::GitHub,
        href: "https://github.com/your-github-username",
        label: "GitHub Profile",
        external: true,
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        href: "https://www.linkedin.com/in/your-linkedin-profile/",
        label: "LinkedIn Profile",
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_page_order() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["hero", "about", "projects", "skills", "contact"]);
    }

    #[test]
    fn test_section_address() {
        assert_eq!(SectionId::Hero.address(), "portfolio.abhishek.dev/");
        assert_eq!(SectionId::Skills.address(), "portfolio.abhishek.dev/skills");
    }

    #[test]
    fn test_project_ids_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert_eq!(SKILLS.len(), 12);
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_hero_phrases_non_empty() {
        assert!(!HERO_PHRASES.is_empty());
    }

    #[test]
    fn test_contact_links_schemes() {
        let phone = &CONTACT_LINKS[0];
        assert!(phone.href.starts_with("tel:"));
        assert!(!phone.external);
        let email = &CONTACT_LINKS[1];
        assert!(email.href.starts_with("mailto:"));
        assert!(email.href.contains("subject=Portfolio%20Inquiry"));
        assert!(CONTACT_LINKS[2..].iter().all(|l| l.external && l.href.starts_with("https://")));
    }
}

//! Static profile content.
//!
//! Everything the page displays that is not view state lives here as
//! `'static` data. Entries that should open the overlay carry a list of
//! [`Document`]s; an empty list means the document has not been published
//! yet and the page renders the action disabled.

use crate::overlay::OverlayItem;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

// =============================================================================
// TYPES
// =============================================================================

/// Which project list the projects section shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectTab {
    #[default]
    Ongoing,
    Completed,
    Planned,
}

impl ProjectTab {
    pub const ALL: [Self; 3] = [Self::Ongoing, Self::Completed, Self::Planned];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Planned => "Planned",
        }
    }
}

/// Status badge shown on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Completed,
    Pursuing,
    Ongoing,
    Planned,
}

impl Progress {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pursuing => "Pursuing",
            Self::Ongoing => "Ongoing",
            Self::Planned => "Planned",
        }
    }

    /// CSS modifier for the badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pursuing => "pursuing",
            Self::Ongoing => "ongoing",
            Self::Planned => "planned",
        }
    }
}

impl From<ProjectTab> for Progress {
    fn from(tab: ProjectTab) -> Self {
        match tab {
            ProjectTab::Ongoing => Self::Ongoing,
            ProjectTab::Completed => Self::Completed,
            ProjectTab::Planned => Self::Planned,
        }
    }
}

/// A viewable document page (certificate scan, transcript, resume page).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Document {
    pub label: &'static str,
    pub image: &'static str,
}

impl Document {
    #[must_use]
    pub fn to_overlay_item(self) -> OverlayItem {
        OverlayItem::new(self.label, self.image)
    }
}

/// Convert documents into overlay sidebar entries, preserving order.
#[must_use]
pub fn overlay_items(documents: &[Document]) -> Vec<OverlayItem> {
    documents.iter().copied().map(Document::to_overlay_item).collect()
}

/// Button at the bottom of a card. An `href` opens a new tab; otherwise the
/// documents open in the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAction {
    pub label: &'static str,
    pub href: Option<&'static str>,
    pub documents: &'static [Document],
}

impl CardAction {
    /// `true` when clicking would do nothing.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.href.is_none() && self.documents.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    /// Element id of the section, used as the link fragment.
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub photo: &'static str,
    pub tags: &'static [&'static str],
    pub about: &'static [&'static str],
    pub interests: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub progress: Progress,
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    /// e.g. "Percentage" or "CGPA".
    pub score_label: &'static str,
    pub score: &'static str,
    pub score_note: Option<&'static str>,
    pub action: CardAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub progress: Progress,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub action: CardAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub tab: ProjectTab,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Rendered across two grid columns.
    pub wide: bool,
    pub action: Option<CardAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub issued: &'static str,
    pub action: CardAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resume {
    pub blurb: &'static str,
    /// Hosted document, opened in a new tab.
    pub view_href: Option<&'static str>,
    pub download_href: Option<&'static str>,
    /// Page images shown in the overlay when no hosted document exists.
    pub pages: &'static [Document],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    /// Open in a new browsing context.
    pub external: bool,
}

// =============================================================================
// DATA
// =============================================================================

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "profile", label: "Profile" },
    NavSection { id: "aboutme", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "education", label: "Education" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "certifications", label: "Certifications" },
    NavSection { id: "achievements", label: "Achievements" },
    NavSection { id: "resume", label: "Resume" },
    NavSection { id: "contact", label: "Contact" },
];

pub const PROFILE: Profile = Profile {
    name: "Bhavika Lalwani",
    photo: "/assets/profile.jpeg",
    tags: &["Aspiring Computer Science Engineer", "AI / ML Enthusiast", "Full-Stack Developer"],
    about: &[
        "I'm a Computer Science student who genuinely loves what I study. My main passion right now is AI and \
         Machine Learning, but I'm the kind of person who gets curious about everything — which means I'm always \
         diving into something new, whether it's a project, a field, or a problem I've never solved before.",
        "I'm at a stage in my journey where I want to explore, experiment, and build. I believe the best way to \
         learn is by doing, and this portfolio is a reflection of exactly that — everything I've worked on, \
         everything I'm working on, and everything I'm planning next.",
    ],
    interests: &[
        "AI and Machine Learning are my main passions, but I'm also deeply interested in software development, data \
         science, and cybersecurity. I love exploring new technologies and frameworks, and I'm always on the lookout \
         for exciting projects to work on.",
        "I also have a strong interest in data structures and algorithms and enjoy working on challenging problems. \
         Beyond tech, I enjoy reading and kickboxing — activities that keep me creative, focused, and balanced.",
    ],
};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory { title: "Languages", skills: &["Python", "Java", "C++", "JavaScript", "TypeScript", "SQL"] },
    SkillCategory {
        title: "Frameworks & Tools",
        skills: &["React", "Node.js", "Django", "Flutter", "Git", "Android Studio"],
    },
    SkillCategory {
        title: "AI / ML & Data",
        skills: &[
            "Machine Learning",
            "Deep Learning",
            "Computer Vision",
            "Data Visualization",
            "Statistics",
            "Database Management",
        ],
    },
    SkillCategory {
        title: "Concepts",
        skills: &["Data Structures", "Algorithms", "OOP", "Web Development", "Problem Solving", "Teamwork"],
    },
];

const VIEW_CERTIFICATE: CardAction = CardAction { label: "View Certificate", href: None, documents: &[] };

pub const EDUCATION: &[Education] = &[
    Education {
        progress: Progress::Completed,
        title: "10th Grade",
        institution: "Centre Point School, Katol Road, Nagpur",
        period: "Year: 2022",
        score_label: "Percentage",
        score: "92%",
        score_note: None,
        action: VIEW_CERTIFICATE,
    },
    Education {
        progress: Progress::Completed,
        title: "Diploma in Computer Science & Engineering",
        institution: "Maharashtra Institute of Technology, Pune",
        period: "2022 – 2025",
        score_label: "CGPA",
        score: "8.75",
        score_note: None,
        action: VIEW_CERTIFICATE,
    },
    Education {
        progress: Progress::Pursuing,
        title: "B.Tech in Computer Science & Engineering",
        institution: "Maharashtra Institute of Technology, Pune",
        period: "2025 – 2028",
        score_label: "CGPA",
        score: "8.75",
        score_note: Some("(until Sem 1, Year 2)"),
        action: CardAction { label: "View Transcript", href: None, documents: &[] },
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    progress: Progress::Completed,
    title: "Software Engineering Intern — Team Lead",
    company: "Salahkaar Consultants",
    period: "2025",
    summary: "Led a team in developing a full-stack HRM web application for a client. Designed the frontend using \
              React and integrated it with a Django backend. This internship was part of my 3rd year of the Diploma \
              program.",
    tags: &["React", "Django", "Python", "SQL", "Team Lead"],
    action: VIEW_CERTIFICATE,
}];

const GITHUB_PROFILE: &str = "https://github.com/BhavikaLalwani3096";

pub const PROJECTS: &[Project] = &[
    Project {
        tab: ProjectTab::Ongoing,
        title: "Portfolio App",
        summary: "A personal portfolio website showcasing my projects, skills, and experience. Supports dark and \
                  light themes.",
        tags: &["Rust", "Leptos", "WebAssembly", "CSS"],
        wide: false,
        action: Some(CardAction { label: "View on GitHub", href: Some(GITHUB_PROFILE), documents: &[] }),
    },
    Project {
        tab: ProjectTab::Completed,
        title: "HRM Web Application",
        summary: "A Human Resource Management web application developed during my internship at Salahkaar \
                  Consultants. I served as Team Lead and was responsible for the React frontend and Django backend \
                  integration.",
        tags: &["React", "Django", "Python", "SQL"],
        wide: true,
        action: Some(CardAction { label: "View Details", href: None, documents: &[] }),
    },
    Project {
        tab: ProjectTab::Planned,
        title: "Blockchain Project",
        summary: "Exploring decentralized application development. Planning to build a certificate verification \
                  system using smart contracts on Ethereum testnet.",
        tags: &["Solidity", "Ethereum", "Web3.js", "React"],
        wide: false,
        action: None,
    },
    Project {
        tab: ProjectTab::Planned,
        title: "Computer Graphics Project",
        summary: "Planning to explore computer graphics as a new field — project details to be decided after \
                  initial exploration.",
        tags: &["OpenGL", "C++", "GLSL"],
        wide: false,
        action: None,
    },
    Project {
        tab: ProjectTab::Planned,
        title: "Emotion Detection",
        summary: "A computer vision project that detects human emotions in real-time using a webcam feed. Built \
                  using deep learning and OpenCV.",
        tags: &["Python", "OpenCV", "Deep Learning", "TensorFlow"],
        wide: false,
        action: None,
    },
    Project {
        tab: ProjectTab::Planned,
        title: "Photo Booth App",
        summary: "A fun cross-platform photo booth app built with Flutter to learn and explore single-codebase \
                  mobile development.",
        tags: &["Flutter", "Dart", "Android", "iOS"],
        wide: false,
        action: None,
    },
];

pub const CERTIFICATIONS: &[Certification] = &[Certification {
    title: "Add your certifications here",
    issuer: "Platform / Issuer",
    issued: "Month Year",
    action: CardAction { label: "Verify Certificate", href: None, documents: &[] },
}];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🏅",
        title: "CGPA 8.75 — Diploma in CSE",
        detail: "Maharashtra Institute of Technology, Pune · 2022–2025",
    },
    Achievement {
        icon: "🏅",
        title: "CGPA 8.75 — B.Tech CSE (Sem 1, Year 2)",
        detail: "Maharashtra Institute of Technology, Pune · 2025–present",
    },
    Achievement {
        icon: "💼",
        title: "Team Lead — Internship Project",
        detail: "Led development of an HRM web app at Salahkaar Consultants · 2025",
    },
    Achievement { icon: "🎓", title: "92% — 10th Grade", detail: "Centre Point School, Nagpur · 2022" },
];

pub const RESUME: Resume = Resume {
    blurb: "Download or view my latest resume below.",
    view_href: None,
    download_href: None,
    pages: &[],
};

pub const CONTACT_BLURB: &str = "Feel free to reach out for opportunities, collaborations, or just to say hi!";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📧",
        label: "Email",
        value: "lalwanibhavi06@gmail.com",
        href: "mailto:lalwanibhavi06@gmail.com",
        external: true,
    },
    ContactLink {
        icon: "💼",
        label: "LinkedIn",
        value: "bhavika-lalwani",
        href: "https://linkedin.com/in/bhavika-lalwani-47850a2a9",
        external: true,
    },
    ContactLink { icon: "🐙", label: "GitHub", value: "BhavikaLalwani3096", href: GITHUB_PROFILE, external: true },
];

/// Projects tagged with `tab`, in content order.
pub fn projects_for(tab: ProjectTab) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.tab == tab)
}

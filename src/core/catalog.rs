//! Static page content: skills, projects and contact links

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
    Office,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::DevOps,
        SkillCategory::Tools,
        SkillCategory::Office,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Tools => "Tools",
            SkillCategory::Office => "Office",
        }
    }
}

/// Skill grid filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    /// Filter pills in display order
    pub fn options() -> impl Iterator<Item = SkillFilter> {
        std::iter::once(SkillFilter::All).chain(SkillCategory::ALL.map(SkillFilter::Category))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillFilter::All => "All",
            SkillFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Category(category) => skill.category == *category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Accent colour of the card glow
    pub color: &'static str,
    pub category: SkillCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

const fn skill(
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    category: SkillCategory,
) -> Skill {
    Skill {
        name,
        icon,
        color,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("JavaScript", "⚡", "#F7DF1E", SkillCategory::Frontend),
    skill("React", "⚛", "#61DAFB", SkillCategory::Frontend),
    skill("HTML", "🔶", "#E34F26", SkillCategory::Frontend),
    skill("CSS", "🎨", "#1572B6", SkillCategory::Frontend),
    skill("Bootstrap", "🅱", "#7952B3", SkillCategory::Frontend),
    skill("PHP", "🐘", "#777BB4", SkillCategory::Backend),
    skill("Laravel", "🔴", "#FF2D20", SkillCategory::Backend),
    skill("Python", "🐍", "#3776AB", SkillCategory::Backend),
    skill("OOP", "📦", "#00BCD4", SkillCategory::Backend),
    skill("SQL", "🗄", "#336791", SkillCategory::Database),
    skill("NoSQL", "🍃", "#4DB33D", SkillCategory::Database),
    skill("Cloud", "☁", "#4285F4", SkillCategory::DevOps),
    skill("Git", "🌿", "#F05032", SkillCategory::Tools),
    skill("GitHub", "🐙", "#6e7681", SkillCategory::Tools),
    skill("Excel", "📊", "#217346", SkillCategory::Office),
    skill("Word", "📝", "#2B579A", SkillCategory::Office),
    skill("PowerPoint", "📑", "#D24726", SkillCategory::Office),
];

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "🛒",
        title: "E-Commerce Platform",
        description: "Full-stack Laravel + React web store with payments integration and real-time inventory management.",
        tech: &["Laravel", "React", "MySQL"],
        color: "#7EB8A0",
    },
    Project {
        icon: "📈",
        title: "Data Dashboard",
        description: "Real-time analytics dashboard with Python backend, chart visualisations, and NoSQL storage.",
        tech: &["Python", "MongoDB", "React"],
        color: "#D4956A",
    },
    Project {
        icon: "☁️",
        title: "Cloud API Service",
        description: "Scalable REST API deployed on cloud infrastructure with auto-scaling and CI/CD pipeline.",
        tech: &["PHP", "Cloud", "SQL"],
        color: "#7EB8D4",
    },
    Project {
        icon: "🎓",
        title: "Student Portal",
        description: "Full-stack web application for managing student records, grades, and course enrollments.",
        tech: &["Laravel", "MySQL", "Bootstrap"],
        color: "#A07EB8",
    },
    Project {
        icon: "💬",
        title: "Real-time Chat App",
        description: "Live messaging application with WebSocket support, rooms, and user authentication.",
        tech: &["React", "PHP", "NoSQL"],
        color: "#B8A07E",
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📧",
        label: "rachidmeccaoui@gmail.com",
        href: "mailto:rachidmeccaoui@gmail.com",
    },
    ContactLink {
        icon: "💼",
        label: "linkedin.com/in/rachid-el-mekkaouy",
        href: "https://www.linkedin.com/in/rachid-el-mekkaouy",
    },
    ContactLink {
        icon: "🐙",
        label: "github.com/rachidelmekkaouy",
        href: "https://github.com/rachidelmekkaouy",
    },
];

/// Hero stats row: (value, label)
pub const HERO_STATS: &[(&str, &str)] = &[
    ("1+", "Years Exp."),
    ("5+", "Projects"),
    ("15+", "Technologies"),
];

pub const ABOUT_TRAITS: &[&str] = &["Problem Solver", "Team Player", "Fast Learner", "Clean Code"];

/// About info row: (icon, text)
pub const ABOUT_INFO: &[(&str, &str)] = &[
    ("📍", "Morocco"),
    ("🎓", "Computer Science"),
    ("💼", "Open to work"),
];

pub fn filter_skills(filter: SkillFilter) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| filter.matches(skill))
}

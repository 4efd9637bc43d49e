//! Project records and the category filter

use folio_core::Color;

/// Category a project belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Backend,
    Fullstack,
}

impl ProjectCategory {
    /// Stable id matching the filter tab labels
    pub fn id(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "backend" => Some(Self::Backend),
            "fullstack" => Some(Self::Fullstack),
            _ => None,
        }
    }
}

/// A filter tab in the projects section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectTab {
    All,
    Category(ProjectCategory),
}

impl ProjectTab {
    /// The tabs in display order
    pub fn all() -> &'static [ProjectTab] {
        const TABS: [ProjectTab; 3] = [
            ProjectTab::All,
            ProjectTab::Category(ProjectCategory::Backend),
            ProjectTab::Category(ProjectCategory::Fullstack),
        ];
        &TABS
    }

    /// Stable id for the tab label
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.id(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(Self::All);
        }
        ProjectCategory::from_id(id).map(Self::Category)
    }

    /// Whether a record of the given category passes this tab
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

/// Visual theme descriptor for a project card: a background gradient pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }
}

/// A single portfolio project. The record set is fixed at build time.
#[derive(Clone, Copy, Debug)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Ordered technology tags
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub gradient: Gradient,
    pub live_url: &'static str,
    pub code_url: &'static str,
}

/// The featured project set, in display order
pub const PROJECTS: [ProjectRecord; 4] = [
    ProjectRecord {
        id: 1,
        title: "E-Commerce Microservices Platform",
        tagline: "5-service microservices backend with Kafka & Redis",
        description: "Microservices backend with five services (User, Product, Order, \
                      Payment, Inventory) built on Spring Boot. RESTful APIs with Swagger \
                      docs, Kafka for order processing, and Redis caching cutting queries \
                      by 60%. Deployed on AWS with Docker and Resilience4j circuit breakers.",
        technologies: &[
            "Java",
            "Spring Boot",
            "Spring Cloud",
            "MySQL",
            "Redis",
            "Kafka",
            "Docker",
            "AWS",
        ],
        category: ProjectCategory::Backend,
        gradient: Gradient::new(Color::from_hex(0x047857), Color::from_hex(0x134E4A)),
        live_url: "#",
        code_url: "https://github.com/saikumar040060",
    },
    ProjectRecord {
        id: 2,
        title: "Hotel Booking Management System",
        tagline: "Full booking & payment backend with CI/CD on AWS",
        description: "Backend handling reservations and payments with optimized PostgreSQL \
                      queries. RESTful APIs with JWT authentication and RBAC using Spring \
                      Boot, plus a Jenkins CI/CD pipeline for automated AWS deployment.",
        technologies: &[
            "Java",
            "Spring Boot",
            "PostgreSQL",
            "JWT",
            "Docker",
            "AWS",
            "Jenkins",
        ],
        category: ProjectCategory::Backend,
        gradient: Gradient::new(Color::from_hex(0x6D28D9), Color::from_hex(0x581C87)),
        live_url: "#",
        code_url: "https://github.com/saikumar040060",
    },
    ProjectRecord {
        id: 3,
        title: "Real-Time Task Management API",
        tagline: "WebSocket-powered collaboration backend",
        description: "Backend API with WebSocket for real-time collaboration using Spring \
                      STOMP. MongoDB for flexible schema storage and an event-driven \
                      architecture for real-time notifications.",
        technologies: &[
            "Java",
            "Spring Boot",
            "WebSocket",
            "MongoDB",
            "Docker",
            "Event-Driven",
        ],
        category: ProjectCategory::Backend,
        gradient: Gradient::new(Color::from_hex(0xEA580C), Color::from_hex(0x881337)),
        live_url: "#",
        code_url: "https://github.com/saikumar040060",
    },
    ProjectRecord {
        id: 4,
        title: "Automated Grading System",
        tagline: "Python backend for evaluating student submissions",
        description: "Python backend for automated evaluation and grading of student code \
                      submissions, built during a Graduate Teaching Assistantship. \
                      Supported 50+ students in data structures, algorithms, and software \
                      engineering.",
        technologies: &[
            "Python",
            "REST API",
            "PostgreSQL",
            "Automated Testing",
            "PyTest",
        ],
        category: ProjectCategory::Fullstack,
        gradient: Gradient::new(Color::from_hex(0x0284C7), Color::from_hex(0x312E81)),
        live_url: "#",
        code_url: "https://github.com/saikumar040060",
    },
];

/// Apply a filter tab to a record list.
///
/// `All` returns every record; a category tab returns the equal-category
/// subset. Original relative order is preserved and the source list is
/// untouched.
pub fn filter_projects(projects: &[ProjectRecord], tab: ProjectTab) -> Vec<&ProjectRecord> {
    projects
        .iter()
        .filter(|project| tab.matches(project.category))
        .collect()
}

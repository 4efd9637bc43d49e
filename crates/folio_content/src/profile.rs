//! Static profile data
//!
//! Hero headlines, the skills grid, the experience timeline, and external
//! links. Opaque presentation data; nothing here has runtime behavior.

/// Headlines rotated by the hero typed-text animation, in cycle order
pub const HERO_TEXTS: [&str; 5] = [
    "Building scalable microservices",
    "Java Spring Boot specialist",
    "AWS cloud deployments",
    "API design & architecture",
    "Backend Software Engineer",
];

/// Technologies shown in the skills grid
pub const TECH_STACK: [&str; 12] = [
    "Java",
    "Spring Boot",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Kafka",
    "AWS",
    "Docker",
    "Kubernetes",
    "Microservices",
    "Spring Security",
];

/// One entry in the experience timeline
#[derive(Clone, Copy, Debug)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

/// The experience timeline, most recent first
pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        role: "Graduate Teaching Assistant",
        company: "Lawrence Technological University",
        location: "Southfield, MI",
        period: "Jun 2024 – Apr 2025",
        points: &[
            "Built Python backend for automated student evaluation & grading systems",
            "Mentored 50+ students in data structures, algorithms & backend development",
            "Conducted technical sessions on API design, database design & system architecture",
        ],
    },
    ExperienceEntry {
        role: "Backend Developer",
        company: "Firstzen Solutions Private Limited",
        location: "Hyderabad, India",
        period: "Jan 2022 – Dec 2023",
        points: &[
            "Designed RESTful APIs using Java Spring Boot handling 10,000+ daily requests with 99.9% uptime",
            "Led migration to microservices architecture with a 20% performance improvement",
            "Implemented Redis caching reducing database load by 50%",
            "Deployed on AWS (EC2, RDS, S3) with Docker & Jenkins CI/CD",
            "Achieved 90%+ test coverage using JUnit and Mockito",
        ],
    },
    ExperienceEntry {
        role: "Java Cloud Intern",
        company: "Firstzen Solutions Private Limited",
        location: "Hyderabad, India",
        period: "May 2021 – Dec 2021",
        points: &[
            "Developed Java backend services deployed on AWS using Spring Boot",
            "Worked with MySQL databases on schema design and query optimization",
            "Participated in code reviews in an Agile/Scrum environment",
        ],
    },
];

/// External profile links and asset paths
#[derive(Clone, Copy, Debug)]
pub struct ProfileLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub resume_path: &'static str,
    pub resume_download_name: &'static str,
    pub profile_image: &'static str,
}

pub const LINKS: ProfileLinks = ProfileLinks {
    github: "https://github.com/saikumar040060",
    linkedin: "https://www.linkedin.com/in/dwarapureddysaikumar/",
    email: "mailto:saikumar040060@gmail.com",
    resume_path: "/satya_resume.pdf",
    resume_download_name: "Satya_Sai_Kumar_Resume.pdf",
    profile_image: "/profile.jpg",
};

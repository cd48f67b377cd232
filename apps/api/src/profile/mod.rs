//! Typed portfolio content: the static data the site renders and the raw
//! material for the assistant's system instruction. Markup and styling stay
//! on the client; this module only owns the facts.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkExperience {
    pub position: &'static str,
    pub company: &'static str,
    pub start_date: &'static str,
    pub end_date: Option<&'static str>,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub graduation_year: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
}

/// Everything the profile endpoint returns in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

/// Page sections the navigation tracker observes, in document order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Nikunja Sarma",
        title: "Cloud-Native Full-Stack Engineer",
        location: "Guwahati, India",
        summary: "Engineer focused on scalable distributed systems and \
                  production-grade architecture: event-driven microservices, \
                  high-throughput message queues, and secure enterprise \
                  integrations.",
    }
}

pub fn experience() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            position: "Senior Backend Engineer",
            company: "Fintech Platform",
            start_date: "2022",
            end_date: None,
            achievements: &[
                "Decomposed a monolithic order pipeline into event-driven services",
                "Cut p95 API latency from 300ms to 45ms with caching and indexing",
            ],
            technologies: &["Node.js", "PostgreSQL", "Redis", "RabbitMQ"],
        },
        WorkExperience {
            position: "Full-Stack Developer",
            company: "SaaS Startup",
            start_date: "2019",
            end_date: Some("2022"),
            achievements: &[
                "Built OIDC-based single sign-on across internal tools",
                "Introduced idempotent job workers handling 50k+ tasks daily",
            ],
            technologies: &["NestJS", "Kafka", "MongoDB", "Keycloak"],
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        degree: "B.Tech, Computer Science and Engineering",
        institution: "Assam Engineering College",
        graduation_year: "2019",
    }]
}

pub fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Backend",
            skills: &["Node.js", "NestJS", "Express", "REST", "gRPC"],
        },
        SkillGroup {
            category: "Data & Messaging",
            skills: &["PostgreSQL", "MongoDB", "Redis", "Kafka", "RabbitMQ"],
        },
        SkillGroup {
            category: "Cloud & Ops",
            skills: &["AWS", "Docker", "Kubernetes", "CI/CD", "Terraform"],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "marketplace",
            title: "Multivendor Marketplace Architecture",
            description: "High-scale e-commerce backend decomposing monolithic \
                          logic into event-driven microservices, designed to \
                          survive flash-sale traffic spikes with zero downtime.",
            tech_stack: &["Node.js", "Express", "Redis", "PostgreSQL", "RabbitMQ"],
            features: &[
                "Microservice separation for Product, Order, and User domains",
                "Event-driven order processing preventing blocking operations",
                "Redis caching layer reducing DB load by 40%",
            ],
        },
        Project {
            id: "oms",
            title: "Distributed Order Management System",
            description: "Orchestrates complex fulfillment workflows with \
                          eventual consistency guarantees.",
            tech_stack: &["NestJS", "Kafka", "BullMQ", "MongoDB"],
            features: &[
                "Kafka stream processing for real-time inventory updates",
                "Exponential backoff retry with dead-letter queue handling",
            ],
        },
        Project {
            id: "auth",
            title: "Secure Multi-Service Authentication",
            description: "Centralized identity management implementing OIDC \
                          standards across internal tools and public APIs.",
            tech_stack: &["OIDC", "OAuth2", "JWT", "Keycloak"],
            features: &[
                "Authorization code flow with PKCE",
                "RBAC hierarchy for granular permission control",
            ],
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        personal: personal_info(),
        experience: experience(),
        education: education(),
        skills: skills(),
        projects: projects(),
    }
}

/// Plain-text digest of the portfolio consumed by the assistant's system
/// instruction.
pub fn portfolio_context() -> String {
    let personal = personal_info();
    let mut out = format!(
        "{} — {} ({}).\n{}\n\nProjects:\n",
        personal.name, personal.title, personal.location, personal.summary
    );
    for project in projects() {
        out.push_str(&format!(
            "- {}: {} Stack: {}.\n",
            project.title,
            project.description,
            project.tech_stack.join(", ")
        ));
    }
    out.push_str("\nExperience:\n");
    for job in experience() {
        out.push_str(&format!(
            "- {} at {} ({}–{}): {}\n",
            job.position,
            job.company,
            job.start_date,
            job.end_date.unwrap_or("present"),
            job.achievements.join("; ")
        ));
    }
    out
}

//! The built-in portfolio content.

use super::{
    Contact, EducationEntry, ExperienceEntry, Proficiency, Profile, Project, Skill, SkillCategory,
    SocialLink,
};

fn skill(name: &str, proficiency: Proficiency) -> Skill {
    Skill {
        name: name.to_string(),
        proficiency,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn profile() -> Profile {
    Profile {
        name: "Moazam Saif".to_string(),
        tagline: "Passionate about creating beautiful, functional, and user-centered \
                  digital experiences. I specialize in full-stack development with a \
                  focus on React, Node.js, and modern web technologies."
            .to_string(),
        roles: strings(&[
            "Full Stack Developer",
            "React Specialist",
            "UI/UX Enthusiast",
            "Problem Solver",
        ]),
        experience: vec![
            ExperienceEntry {
                title: "Software Development Intern".to_string(),
                company: "1ten Solutions".to_string(),
                period: "July 2024 - Present".to_string(),
                highlights: strings(&[
                    "Learning comprehensive web development technologies and frameworks",
                    "Gaining hands-on experience in UI/UX design principles and best practices",
                    "Building responsive web applications using modern development tools",
                    "Collaborating with senior developers on real-world projects",
                ]),
            },
            ExperienceEntry {
                title: "Cybersecurity Research Intern".to_string(),
                company: "Cybersecurity Zone, NUST".to_string(),
                period: "June 2024 - Present".to_string(),
                highlights: strings(&[
                    "Developing cutting-edge projects implementing Post Quantum Cryptography",
                    "Researching quantum-resistant encryption algorithms and protocols",
                    "Working on security solutions for future quantum computing threats",
                    "Contributing to academic research in cybersecurity field",
                ]),
            },
            ExperienceEntry {
                title: "Mobile Development Intern".to_string(),
                company: "SPS Solutions".to_string(),
                period: "July 2024 - Present".to_string(),
                highlights: strings(&[
                    "Learning mobile application development for iOS and Android platforms",
                    "Gaining expertise in project management methodologies and tools",
                    "Developing cross-platform mobile solutions using modern frameworks",
                    "Participating in agile development processes and sprint planning",
                ]),
            },
        ],
        skills: vec![
            SkillCategory {
                title: "Frontend".to_string(),
                skills: vec![
                    skill("React", Proficiency::Expert),
                    skill("JavaScript", Proficiency::Expert),
                    skill("HTML/CSS", Proficiency::Expert),
                    skill("Tailwind CSS", Proficiency::Proficient),
                    skill("TypeScript", Proficiency::Learning),
                    skill("Next.js", Proficiency::Learning),
                    skill("Vite", Proficiency::Proficient),
                ],
            },
            SkillCategory {
                title: "Backend & Database".to_string(),
                skills: vec![
                    skill("Node.js", Proficiency::Proficient),
                    skill("Express.js", Proficiency::Proficient),
                    skill("Python", Proficiency::Proficient),
                    skill("C++", Proficiency::Familiar),
                    skill("MongoDB", Proficiency::Proficient),
                    skill("MySQL", Proficiency::Proficient),
                    skill("Redis", Proficiency::Familiar),
                    skill("REST APIs", Proficiency::Proficient),
                    skill("Java", Proficiency::Familiar),
                ],
            },
            SkillCategory {
                title: "Tools & DevOps".to_string(),
                skills: vec![
                    skill("Git", Proficiency::Proficient),
                    skill("GitHub", Proficiency::Proficient),
                    skill("Docker", Proficiency::Familiar),
                    skill("Figma", Proficiency::Proficient),
                    skill("Postman", Proficiency::Familiar),
                    skill("Framer", Proficiency::Basic),
                ],
            },
        ],
        projects: vec![
            Project {
                title: "Search Engine".to_string(),
                description: "A Python-based search engine built for DSA course project. Uses a \
                              dataset of 300k+ entries with optimized indexing through pkl files \
                              for fast data fetching and retrieval."
                    .to_string(),
                technologies: strings(&[
                    "Python",
                    "Data Structures",
                    "Pickle",
                    "Indexing",
                    "File I/O",
                ]),
                repo: "https://github.com/Moazam-Saif/SearchEngine".to_string(),
            },
            Project {
                title: "Dostluk - NUST Social Platform".to_string(),
                description: "A collaborative social media platform designed specifically for \
                              NUST students to connect based on shared interests and hobbies. \
                              Built as a database course project with full CRUD functionality."
                    .to_string(),
                technologies: strings(&["React", "Node.js", "MySQL", "Express", "CSS"]),
                repo: "https://github.com/Moazam-Saif/SocialMedia-MERN".to_string(),
            },
            Project {
                title: "Skill Swap Platform".to_string(),
                description: "A MERN stack application where users can list skills they have or \
                              want to learn. The platform matches users with complementary skill \
                              sets using external APIs and enables skill exchange connections."
                    .to_string(),
                technologies: strings(&[
                    "MongoDB",
                    "Express",
                    "React",
                    "Node.js",
                    "External APIs",
                ]),
                repo: "https://github.com/Moazam-Saif/skillswap-platform".to_string(),
            },
            Project {
                title: "Car Rental Management System".to_string(),
                description: "An OOP course project built with Java and JavaFX. Features a \
                              complete car rental management system with database connectivity \
                              using JDBC for managing vehicles, customers, and rental \
                              transactions."
                    .to_string(),
                technologies: strings(&["Java", "JavaFX", "JDBC", "OOP", "Database Design"]),
                repo: "https://github.com/Moazam-Saif/Car-Rental-Management-System-JAVA"
                    .to_string(),
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Bachelor of Engineering in Software Engineering".to_string(),
                institution: "National University of Sciences and Technology (NUST), Islamabad"
                    .to_string(),
                period: "2023 - 2027".to_string(),
                grade: None,
                description: "Pursuing a software engineering degree with focus on software \
                              development, algorithms, and system design."
                    .to_string(),
            },
            EducationEntry {
                degree: "Intermediate in Computer Science (ICS)".to_string(),
                institution: "Punjab College".to_string(),
                period: "2021 - 2023".to_string(),
                grade: Some("94%".to_string()),
                description: "Completed intermediate education with excellent performance in \
                              computer science, mathematics, and physics."
                    .to_string(),
            },
        ],
        contact: Contact {
            blurb: "I'm always interested in new opportunities and exciting projects. Whether \
                    you have a question or just want to say hi, feel free to reach out!"
                .to_string(),
            email: "saifmoazam9@gmail.com".to_string(),
            location: "Islamabad, Pakistan".to_string(),
            links: vec![
                SocialLink {
                    name: "Email".to_string(),
                    url: "mailto:saifmoazam9@gmail.com".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/Moazam-Saif".to_string(),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/moazam-saif".to_string(),
                },
            ],
        },
    }
}

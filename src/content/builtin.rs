//! The hand-authored portfolio shipped with the binary.

use super::{
    Certification, ContactInfo, Description, Portfolio, Profile, Project, Recognition,
    SkillCategory, SkillIcon, TimelineEntry, TimelineKind, TimelineSide,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Portfolio {
    /// Built-in content.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Aparna Alamanda".to_string(),
                headline: "Software Engineer | Data & Cloud Enthusiast".to_string(),
                bio: "Turning data into insights, code into solutions, and coffee into code! 🚀 \
                      Whether it's crafting full-stack apps, crunching big data, or architecting \
                      in the cloud, I love building things that make an impact."
                    .to_string(),
                copyright_year: 2024,
            },
            typewriter_words: strings(&[
                "Machine Learning",
                "Data Analytics",
                "Full-Stack Development",
                "Cloud Architecture",
            ]),
            timeline: vec![
                TimelineEntry {
                    kind: TimelineKind::Education,
                    title: "MEng in Computer Science".to_string(),
                    organization: "Virginia Tech".to_string(),
                    period: "2023 - 2025".to_string(),
                    description: Description::Text(
                        "Focus on Machine Learning and Data Analytics".to_string(),
                    ),
                    side: TimelineSide::Left,
                },
                TimelineEntry {
                    kind: TimelineKind::Work,
                    title: "Data Analyst".to_string(),
                    organization: "Tata Consultancy Services".to_string(),
                    period: "2020 - 2023".to_string(),
                    description: Description::Bullets(strings(&[
                        "Led data analysis initiatives resulting in 25% improvement in process efficiency",
                        "Developed ML models for predictive analytics with 90% accuracy",
                        "Collaborated with cross-functional teams to implement data-driven solutions",
                    ])),
                    side: TimelineSide::Right,
                },
                TimelineEntry {
                    kind: TimelineKind::Education,
                    title: "B.Tech in Computer Science".to_string(),
                    organization: "Jawaharlal Nehru Technological University".to_string(),
                    period: "2016 - 2020".to_string(),
                    description: Description::Text("First Class with Distinction".to_string()),
                    side: TimelineSide::Left,
                },
            ],
            certifications: [
                ("AWS Certified Cloud Practitioner", "AWS"),
                ("Django for Python Developers", "Udemy"),
                ("Python Certification, Data Mining", "NPTEL"),
                ("NLP using Python for Machine Learning", "LinkedIn"),
                ("Big Data Workshop", "JNTUV"),
            ]
            .into_iter()
            .map(|(title, issuer)| Certification {
                title: title.to_string(),
                issuer: issuer.to_string(),
            })
            .collect(),
            recognitions: vec![
                Recognition {
                    description: "Received spot on award in June 2021 for proactively handling \
                                  user survey campaigns at Tata Consultancy Services."
                        .to_string(),
                },
                Recognition {
                    description: "Received spot on award in July 2022 for suggesting ML models \
                                  for process improvement at Tata Consultancy Services."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Text Summarization Model".to_string(),
                    description: "Developed an advanced NLP model for automatic text \
                                  summarization with 85% accuracy"
                        .to_string(),
                    tags: strings(&["Python", "NLP", "TensorFlow"]),
                    repository_url: "https://github.com/yourusername/text-summarization"
                        .to_string(),
                },
                Project {
                    title: "UniNav".to_string(),
                    description: "Campus navigation app with real-time indoor positioning and \
                                  AR guidance"
                        .to_string(),
                    tags: strings(&["React Native", "Node.js", "MongoDB"]),
                    repository_url: "https://github.com/yourusername/uninav".to_string(),
                },
                Project {
                    title: "Disease Risk Prediction".to_string(),
                    description: "ML-based system for early disease risk assessment using \
                                  patient data"
                        .to_string(),
                    tags: strings(&["Python", "Scikit-learn", "PostgreSQL"]),
                    repository_url: "https://github.com/yourusername/disease-prediction"
                        .to_string(),
                },
            ],
            skill_categories: vec![
                SkillCategory {
                    title: "Programming Languages".to_string(),
                    icon: SkillIcon::Code,
                    skills: strings(&["Python", "Java", "C++", "JavaScript", "TypeScript"]),
                },
                SkillCategory {
                    title: "Frameworks".to_string(),
                    icon: SkillIcon::Server,
                    skills: strings(&["React", "Node.js", "Spring", "TensorFlow", "PyTorch"]),
                },
                SkillCategory {
                    title: "Databases".to_string(),
                    icon: SkillIcon::Database,
                    skills: strings(&["MySQL", "PostgreSQL", "MongoDB", "Redis"]),
                },
                SkillCategory {
                    title: "Cloud & Tools".to_string(),
                    icon: SkillIcon::Server,
                    skills: strings(&["AWS", "Azure", "Docker", "Kubernetes", "Git"]),
                },
            ],
            contact: ContactInfo {
                email: "aparna.alamanda@gmail.com".to_string(),
                linkedin_url: "https://www.linkedin.com/in/aparnaalamanda/".to_string(),
                github_url: "https://github.com".to_string(),
                blurb: "I'm currently open to new opportunities and would love to hear from \
                        you. Whether you have a question or just want to say hi, feel free \
                        to reach out!"
                    .to_string(),
                resume_file_name: "Aparnaa_Resume.pdf".to_string(),
            },
        }
    }
}

use dioxus::prelude::*;

struct SkillCategory {
    title: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Data Scientist",
        description: "Transforming raw data into actionable insights using advanced analytics and machine learning.",
        skills: &["Python", "Pandas", "Scikit-learn", "SQL", "NumPy", "Matplotlib"],
    },
    SkillCategory {
        title: "AI Specialist",
        description: "Building intelligent systems and neural networks that learn and adapt to solve complex problems.",
        skills: &["TensorFlow", "PyTorch", "NLP", "Computer Vision", "Deep Learning", "Neural Networks"],
    },
    SkillCategory {
        title: "Frontend Developer",
        description: "Creating beautiful, responsive, and interactive user interfaces with modern web technologies.",
        skills: &["React", "TypeScript", "JavaScript", "CSS3", "HTML5", "Tailwind"],
    },
    SkillCategory {
        title: "Data Analyst",
        description: "Analyzing complex datasets to uncover patterns, trends, and insights that drive business decisions.",
        skills: &["Tableau", "Power BI", "Excel", "Statistics", "Data Visualization", "Seaborn"],
    },
];

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            div { class: "container",
                h2 { class: "section-title", "My Skills" }
                div { class: "skills-grid",
                    for category in SKILL_CATEGORIES.iter() {
                        div { class: "skill-category",
                            h3 { "{category.title}" }
                            p { "{category.description}" }
                            div { class: "skill-tags",
                                for skill in category.skills.iter() {
                                    span { class: "skill-tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

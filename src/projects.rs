use std::collections::HashSet;

use dioxus::prelude::*;

#[derive(Clone, Debug)]
struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    live_link: Option<&'static str>,
    code_link: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Bike Position Corrector",
        description: "Smart system to correct and track bicycle position in real-time.",
        tags: &["IoT", "Python", "Sensors"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Cotton Disease Classification",
        description: "AI model for detecting and classifying cotton crop diseases.",
        tags: &["TensorFlow", "Python", "Deep Learning", "Computer Vision"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Karunya Interpreter and Computer Kit",
        description: "Chromosome analysis system with digital interpretation for genetics.",
        tags: &["AI", "Genomics", "Python", "React"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Deaf Over Voice System",
        description: "Assistive technology enabling deaf users to communicate via voice-to-text.",
        tags: &["NLP", "Speech Recognition", "Accessibility", "3D modelling"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Resume Understanding Language Engine",
        description: "NLP-powered engine to parse and understand resumes efficiently.",
        tags: &["NLP", "Python", "FastAPI", "OCR"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Classification of Aviation Engine (ClAvE)",
        description: "AI model for classification and fault detection in aviation engines.",
        tags: &["Machine Learning", "Aerospace", "Python", "Signal Processing"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "Disaster Analysis and Description (D.A.D)",
        description: "Dashboard presenting past disaster incidents across India.",
        tags: &["MERN", "Tailwind", "Website Development"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "MLCare",
        description: "Digital healthcare project for monitoring and analyzing lung health.",
        tags: &["Healthcare", "Python", "AI", "ML"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "OpenAI Whisper Fine-tuning",
        description: "Fine-tuned Whisper model for optimized speech-to-text applications.",
        tags: &["OpenAI", "Whisper", "Fine-tuning"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "FAST - Flood Alert System Tracker",
        description: "Real-time flood monitoring and alert system using sensor data, predictive models, and automated notifications for early disaster response.",
        tags: &["AI", "IoT", "Python", "AWS", "Real-time Monitoring"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "SORT - Software Optimization & Resource Team",
        description: "AI-driven system for optimizing software workflows and resource allocation using intelligent agents and performance analytics.",
        tags: &["AI Agents", "Python", "Optimization", "LangChain", "Automation"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
    Project {
        title: "PACE - Project Automation & Collaboration Engine",
        description: "Task and project management platform enhanced with AI agents for workflow automation, collaboration, and intelligent task orchestration.",
        tags: &["AI Agents", "Task Management", "Automation", "Python", "Collaboration"],
        live_link: Some("#"),
        code_link: Some("#"),
    },
];

/// Cards flip on tap or Enter so touch and keyboard users get the detail
/// face too.
#[component]
pub fn ProjectsSection() -> Element {
    let mut flipped = use_signal(HashSet::<usize>::new);

    rsx! {
        section { id: "projects", class: "projects",
            div { class: "container",
                h2 { class: "section-title", "My Projects" }
                div { class: "projects-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        div {
                            class: if flipped().contains(&index) { "flip-card is-flipped" } else { "flip-card" },
                            role: "button",
                            tabindex: "0",
                            aria_label: "Show details for {project.title}",
                            onclick: move |_| {
                                let mut next = flipped();
                                if !next.remove(&index) {
                                    next.insert(index);
                                }
                                flipped.set(next);
                            },
                            div { class: "flip-content",
                                h3 { "{project.title}" }
                                p { "{project.description}" }
                                div { class: "flip-tags",
                                    for tag in project.tags.iter() {
                                        span { class: "flip-tag", "{tag}" }
                                    }
                                }
                                div { class: "flip-links",
                                    if let Some(link) = project.live_link {
                                        a {
                                            href: "{link}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            aria_label: "Visit {project.title} website",
                                            "Live"
                                        }
                                    }
                                    if let Some(link) = project.code_link {
                                        a {
                                            href: "{link}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            aria_label: "{project.title} source code",
                                            "Code"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

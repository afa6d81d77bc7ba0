use dioxus::prelude::*;

struct Certificate {
    title: &'static str,
    detail: &'static str,
}

const CERTIFICATES: &[Certificate] = &[
    Certificate { title: "AWS Academy Graduate", detail: "AWS Cloud Foundational · 2024" },
    Certificate { title: "AWS Developer Associate", detail: "Infosys Springboard · 2024" },
    Certificate { title: "AI Agents with MongoDB", detail: "MongoDB University · 2024" },
    Certificate { title: "Watsonx AI Hackathon", detail: "IBM Watsonx · 2024" },
    Certificate { title: "RAG with MongoDB", detail: "MongoDB University · 2024" },
    Certificate { title: "Vector Search MongoDB", detail: "MongoDB University · 2024" },
    Certificate { title: "Docker Training", detail: "KodeKloud · 2024" },
    Certificate { title: "Full Stack Development", detail: "PrepInsta · 2024" },
    Certificate { title: "Python Essentials", detail: "Cisco Networking Academy · 2024" },
    Certificate { title: "C Programming", detail: "Cisco Networking Academy · 2024" },
    Certificate { title: "Cloud Computing", detail: "NPTEL · 2024" },
    Certificate { title: "Data Mining", detail: "NPTEL · 2024" },
    Certificate { title: "Cyber Threat Intelligence", detail: "ArcX · 2024" },
    Certificate { title: "English Proficiency (C2)", detail: "EF SET · 2024" },
    Certificate { title: "English for Competitive Exams", detail: "NPTEL · 2024" },
    Certificate { title: "HackSpirit Hackathon", detail: "Participant · 2024" },
    Certificate { title: "Mindkraft 2024", detail: "Event Participant · 2024" },
    Certificate { title: "Java Intermediate", detail: "HackerRank · 2024" },
    Certificate { title: "Data Science Bootcamp", detail: "COTPot · 2024" },
    Certificate { title: "Exploratory Data Analysis", detail: "Infosys Springboard · 2024" },
    Certificate { title: "Java Programming", detail: "SoloLearn · 2024" },
    Certificate { title: "Prompt Engineering", detail: "NVIDIA · 2024" },
    Certificate { title: "OpenCV Bootcamp", detail: "OpenCV University · 2024" },
];

#[component]
pub fn CertificatesSection() -> Element {
    rsx! {
        section { id: "certificates", class: "certificates",
            div { class: "container",
                h2 { class: "section-title", "Certificates & Achievements" }
                div { class: "cert-showcase",
                    for cert in CERTIFICATES.iter() {
                        div { class: "cert-item",
                            h4 { "{cert.title}" }
                            p { "{cert.detail}" }
                        }
                    }
                }
            }
        }
    }
}

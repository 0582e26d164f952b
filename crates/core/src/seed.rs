//! Default portfolio content.
//!
//! Used when no snapshot has been persisted yet and by the reset action.

use crate::types::{
    Experience, ExperienceId, Profile, Project, ProjectId, Service, ServiceIcon, ServiceId,
    Snapshot, Socials, Testimonial, TestimonialId,
};

/// Build the seed dataset.
#[must_use]
pub fn seed() -> Snapshot {
    Snapshot {
        profile: profile(),
        skills: strings(&[
            "Laravel",
            "PHP",
            "React.js",
            "JavaScript",
            "TypeScript",
            "Flutter",
            "MySQL",
            "HTML/CSS",
            "Bootstrap",
            "Tailwind CSS",
            "Git",
            "REST APIs",
        ]),
        services: services(),
        experience: experience(),
        projects: projects(),
        testimonials: testimonials(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn profile() -> Profile {
    Profile {
        name: "Mubashir T".to_string(),
        role: "Full Stack Developer".to_string(),
        email: "muba4shir@gmail.com".to_string(),
        phone: "+91 9061417949".to_string(),
        address: "Kuttippuram, Malappuram, Kerala 679582".to_string(),
        summary: "Result-driven Full-stack developer with a strong background in building web \
                  applications, administrative dashboards, CRM systems, and e-learning platforms. \
                  Proficient in modern web technologies and frameworks, with expertise in \
                  scalable architecture, product development, and robust error handling."
            .to_string(),
        socials: Socials {
            github: Some("https://github.com/".to_string()),
            linkedin: Some("https://linkedin.com/".to_string()),
            twitter: None,
        },
    }
}

fn services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId::new("s1"),
            title: "Web Application Development".to_string(),
            description: "Building scalable, secure, and high-performance web applications using \
                          Laravel, React, and PHP."
                .to_string(),
            icon: ServiceIcon::Globe,
        },
        Service {
            id: ServiceId::new("s2"),
            title: "Mobile App Development".to_string(),
            description: "Cross-platform mobile application development using Flutter for \
                          seamless user experiences on Android and iOS."
                .to_string(),
            icon: ServiceIcon::Smartphone,
        },
        Service {
            id: ServiceId::new("s3"),
            title: "CRM & ERP Systems".to_string(),
            description: "Custom administrative dashboards, CRM systems, and HRM solutions \
                          tailored to business needs."
                .to_string(),
            icon: ServiceIcon::Database,
        },
        Service {
            id: ServiceId::new("s4"),
            title: "E-Commerce & Payment Integration".to_string(),
            description: "End-to-end e-commerce solutions with secure payment gateway \
                          integrations (Stripe, Razorpay, etc.)."
                .to_string(),
            icon: ServiceIcon::ShoppingCart,
        },
    ]
}

fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: ExperienceId::new("e1"),
            company: "Al Rawabi Projects".to_string(),
            role: "Web Developer".to_string(),
            period: "Oct 2024 - Present".to_string(),
            description: strings(&[
                "Developed and maintained dynamic and responsive websites using HTML, CSS, \
                 JavaScript, PHP, and Laravel.",
                "Built custom features, dashboards, and APIs to support business operations.",
                "Integrated third-party services such as payment gateways, email services, and \
                 SMS APIs.",
            ]),
        },
        Experience {
            id: ExperienceId::new("e2"),
            company: "GREENWORLD International".to_string(),
            role: "Full Stack Developer".to_string(),
            period: "Mar 2022 - Oct 2024".to_string(),
            description: strings(&[
                "Designed and developed scalable web applications using Laravel.",
                "Created CRM systems, HRM systems, dashboards, and LMS platforms.",
                "Developed cross-platform mobile apps using Flutter.",
            ]),
        },
        Experience {
            id: ExperienceId::new("e3"),
            company: "XpertConsortium".to_string(),
            role: "Full Stack Developer".to_string(),
            period: "Nov 2021 - Feb 2022".to_string(),
            description: strings(&[
                "Worked on full-stack development using HTML, CSS, JS, PHP, React.js, and Laravel.",
                "Integrated and optimized APIs for seamless data exchange.",
                "Managed database operations using MySQL.",
            ]),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("p1"),
            title: "Admission Tracker".to_string(),
            description: "Mobile and web application for student tracking, facilitating seamless \
                          monitoring of student activities and progress."
                .to_string(),
            link: Some("https://admissiontracker.in/".to_string()),
            tags: strings(&["Mobile App", "Web App", "Tracking"]),
            image: "https://picsum.photos/seed/admission/800/600".to_string(),
        },
        Project {
            id: ProjectId::new("p2"),
            title: "Target Learning App".to_string(),
            description: "E-learning platform with subscription plans, lesson chapters, and Vimeo \
                          integration."
                .to_string(),
            link: Some("https://elearn.targetlearningapp.com/login.php".to_string()),
            tags: strings(&["LMS", "Video Integration", "Subscription"]),
            image: "https://picsum.photos/seed/target/800/600".to_string(),
        },
        Project {
            id: ProjectId::new("p3"),
            title: "Lifescool Website".to_string(),
            description: "Interactive platform connecting users to innovative educational \
                          resources with a modern design."
                .to_string(),
            link: Some("https://www.lifescool.app/".to_string()),
            tags: strings(&["Education", "Interactive", "React"]),
            image: "https://picsum.photos/seed/lifescool/800/600".to_string(),
        },
        Project {
            id: ProjectId::new("p4"),
            title: "Wytfox Website".to_string(),
            description: "Visually appealing corporate website showcasing company offerings with \
                          smooth navigation."
                .to_string(),
            link: Some("https://wytfox.in/".to_string()),
            tags: strings(&["Corporate", "Design", "Frontend"]),
            image: "https://picsum.photos/seed/wytfox/800/600".to_string(),
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: TestimonialId::new("t1"),
            name: "John Doe".to_string(),
            role: "Project Manager".to_string(),
            company: "Al Rawabi Projects".to_string(),
            text: "Mubashir is an exceptional developer who always delivers high-quality code on \
                   time."
                .to_string(),
            avatar: "https://picsum.photos/seed/user1/100/100".to_string(),
        },
        Testimonial {
            id: TestimonialId::new("t2"),
            name: "Sarah Smith".to_string(),
            role: "CEO".to_string(),
            company: "Greenworld Int.".to_string(),
            text: "His ability to handle both backend logic and frontend aesthetics is impressive."
                .to_string(),
            avatar: "https://picsum.photos/seed/user2/100/100".to_string(),
        },
    ]
}

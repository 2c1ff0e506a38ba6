use super::entities::{
    AnimationIntensity, AnimationSpeed, Animations, Certification, ColorTheme, Education,
    Experience, Extracurricular, Fonts, Layout, PersonalInfo, PortfolioData, Project, SectionId,
    SkillCategory, SkillItem, Spacing, WebsiteSettings,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Default portfolio content. Written to the remote store the first time an
/// empty store is observed, and used as the in-memory starting point before
/// the initial fetch resolves.
pub fn seed_data() -> PortfolioData {
    PortfolioData {
        personal_info: PersonalInfo {
            name: "Devrajsinh Gohil".into(),
            title: "Project Management Professional".into(),
            email: "djgohil2012@gmail.com".into(),
            phone: "+91-8160529391".into(),
            location: "Rajkot, Gujarat, India".into(),
            linkedin: "linkedin.com/in/devrajsinh2012/".into(),
            bio: "Results-oriented Project Management professional with hands-on experience in \
                  leading digital marketing campaigns, cross-functional coordination, and product \
                  management. Proven track record of streamlining processes and enhancing project \
                  delivery. Passionate about applying strategic thinking and leadership skills to \
                  drive impactful projects."
                .into(),
        },
        skills: vec![
            SkillCategory {
                category: "Project Management".into(),
                items: vec![
                    SkillItem {
                        name: "Project Management".into(),
                        proficiency: 90,
                        description: "Experienced in managing projects from conception to \
                                      completion, with a focus on meeting deadlines and \
                                      deliverables."
                            .into(),
                    },
                    SkillItem {
                        name: "Agile & Scrum Methodologies".into(),
                        proficiency: 85,
                        description: "Implemented Agile frameworks to improve team productivity \
                                      and project delivery timelines."
                            .into(),
                    },
                    SkillItem {
                        name: "Cross-Functional Team Leadership".into(),
                        proficiency: 85,
                        description: "Led diverse teams to achieve common goals while leveraging \
                                      individual strengths."
                            .into(),
                    },
                ],
            },
            SkillCategory {
                category: "Technical Skills".into(),
                items: vec![
                    SkillItem {
                        name: "Artificial Intelligence (AI)".into(),
                        proficiency: 80,
                        description: "Applied AI concepts to optimize processes and develop \
                                      innovative solutions."
                            .into(),
                    },
                    SkillItem {
                        name: "Data-Driven Decision Making".into(),
                        proficiency: 85,
                        description: "Analyzed complex datasets to derive actionable insights \
                                      for business strategy."
                            .into(),
                    },
                ],
            },
            SkillCategory {
                category: "Business Skills".into(),
                items: vec![
                    SkillItem {
                        name: "Market Analysis & Research".into(),
                        proficiency: 90,
                        description: "Conducted comprehensive market research to identify trends \
                                      and opportunities."
                            .into(),
                    },
                    SkillItem {
                        name: "Process Optimization".into(),
                        proficiency: 85,
                        description: "Streamlined workflows to increase efficiency and reduce \
                                      operational costs."
                            .into(),
                    },
                    SkillItem {
                        name: "Communication & Interpersonal Skills".into(),
                        proficiency: 95,
                        description: "Effectively communicated complex ideas to diverse \
                                      stakeholders."
                            .into(),
                    },
                    SkillItem {
                        name: "Exceptional Organizational Skills".into(),
                        proficiency: 90,
                        description: "Maintained clear documentation and structure across \
                                      multiple concurrent projects."
                            .into(),
                    },
                ],
            },
        ],
        experience: vec![
            Experience {
                company: "Integers: Beyond the Decimal Point".into(),
                position: "Chief Operating Officer (COO)".into(),
                period: "Nov 2024 - Present".into(),
                description: "Leading operations and strategic initiatives to drive business \
                              growth."
                    .into(),
                achievements: strings(&[
                    "Spearhead cross-functional operations to ensure seamless execution of \
                     business strategies",
                    "Collaborate with leadership to establish and implement growth plans and \
                     operational improvements",
                    "Lead digital marketing campaigns to increase brand visibility and customer \
                     engagement",
                ]),
                technologies: strings(&[
                    "Digital Marketing",
                    "Strategic Planning",
                    "Operations Management",
                ]),
            },
            Experience {
                company: "ORSCOPE TECHNOLOGIES".into(),
                position: "Project Management Intern".into(),
                period: "Apr 2024 - Jun 2024".into(),
                description: "Contributed to project management processes and product \
                              development initiatives."
                    .into(),
                achievements: strings(&[
                    "Conducted user research and market trend analysis",
                    "Streamlined requirement gathering processes, reducing project planning \
                     time by 10%",
                    "Accelerated the delivery of innovative products to market",
                ]),
                technologies: strings(&[
                    "Market Research",
                    "Product Development",
                    "Process Optimization",
                ]),
            },
            Experience {
                company: "Self Employed".into(),
                position: "Teacher".into(),
                period: "Jun 2022 - May 2024".into(),
                description: "Designed and delivered educational content for primary grade \
                              students."
                    .into(),
                achievements: strings(&[
                    "Created and implemented effective lessons for primary grades",
                    "Empowered student success through engaging and interactive teaching methods",
                ]),
                technologies: strings(&[
                    "Curriculum Development",
                    "Interactive Learning",
                    "Student Engagement",
                ]),
            },
        ],
        education: vec![Education {
            degree: "Bachelor of Technology in Computer Engineering".into(),
            institution: "Marwadi University (NAAC A+)".into(),
            period: "2020 - 2024".into(),
            description: "Comprehensive education in computer engineering fundamentals and \
                          applications."
                .into(),
        }],
        certifications: vec![
            Certification {
                name: "Google Project Management Certification".into(),
                issuer: "Coursera.org".into(),
                date: "2023".into(),
                description: "Professional certification in project management methodologies \
                              and best practices."
                    .into(),
            },
            Certification {
                name: "Google AI Essentials".into(),
                issuer: "Coursera.org".into(),
                date: "2023".into(),
                description: "Certification in artificial intelligence concepts and \
                              applications."
                    .into(),
            },
            Certification {
                name: "Google Digital Marketing & E-commerce".into(),
                issuer: "Coursera.org".into(),
                date: "2022".into(),
                description: "Comprehensive training in digital marketing strategies and \
                              e-commerce principles."
                    .into(),
            },
        ],
        extracurricular: vec![
            Extracurricular {
                role: "Chair of Innovation Vertical".into(),
                organization: "Young Indians".into(),
                period: "2023 - Present".into(),
                description: "Lead innovation initiatives and projects within the Young Indians \
                              organization."
                    .into(),
            },
            Extracurricular {
                role: "Anchor, Public Speaking".into(),
                organization: "Marwadi University".into(),
                period: "2022 - 2024".into(),
                description: "Hosted university events and developed public speaking skills \
                              through regular presentations."
                    .into(),
            },
            Extracurricular {
                role: "Community Member".into(),
                organization: "Research Activity Club".into(),
                period: "2021 - 2024".into(),
                description: "Participated in research activities and collaborative projects."
                    .into(),
            },
            Extracurricular {
                role: "Theatre Artist".into(),
                organization: "Utsav Natak Academy".into(),
                period: "2020 - 2023".into(),
                description: "Performed in theatrical productions and developed creative \
                              expression skills."
                    .into(),
            },
        ],
        projects: vec![
            Project {
                title: "Digital Marketing Campaign Optimization".into(),
                description: "Led a comprehensive digital marketing campaign that increased \
                              brand visibility and customer engagement through strategic \
                              planning and execution."
                    .into(),
                technologies: strings(&[
                    "Digital Marketing",
                    "Analytics",
                    "Campaign Management",
                ]),
                role: "Project Lead".into(),
                outcome: "Increased engagement metrics by 25% through targeted content \
                          strategies and optimization."
                    .into(),
            },
            Project {
                title: "Process Optimization Initiative".into(),
                description: "Streamlined internal processes to reduce redundancies and improve \
                              operational efficiency across departments."
                    .into(),
                technologies: strings(&[
                    "Process Mapping",
                    "Workflow Optimization",
                    "Change Management",
                ]),
                role: "Process Improvement Specialist".into(),
                outcome: "Reduced project planning time by 10% through implementation of \
                          streamlined requirement gathering processes."
                    .into(),
            },
            Project {
                title: "Interactive Learning Platform".into(),
                description: "Developed an engaging teaching methodology incorporating \
                              interactive elements to improve student learning outcomes."
                    .into(),
                technologies: strings(&[
                    "Educational Technology",
                    "Curriculum Design",
                    "Interactive Learning",
                ]),
                role: "Curriculum Designer".into(),
                outcome: "Improved student engagement and comprehension through innovative \
                          teaching methods."
                    .into(),
            },
        ],
        website_settings: WebsiteSettings {
            color_theme: ColorTheme {
                primary: "#0a192f".into(),
                secondary: "#64ffda".into(),
                background: "#0a192f".into(),
                text_primary: "#ccd6f6".into(),
                text_secondary: "#8892b0".into(),
                accent: "#64ffda".into(),
            },
            fonts: Fonts {
                heading: "Montserrat, sans-serif".into(),
                body: "Open Sans, sans-serif".into(),
                code: "Fira Code, monospace".into(),
            },
            animations: Animations {
                enabled: true,
                speed: AnimationSpeed::Normal,
                intensity: AnimationIntensity::Medium,
            },
            layout: Layout {
                sections: vec![
                    SectionId::Hero,
                    SectionId::About,
                    SectionId::Skills,
                    SectionId::Experience,
                    SectionId::Projects,
                    SectionId::Education,
                    SectionId::Contact,
                ],
                max_width: "1200px".into(),
                spacing: Spacing::Comfortable,
            },
        },
    }
}

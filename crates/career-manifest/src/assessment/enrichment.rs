//! Static reference material attached to the winning career.

use serde::{Deserialize, Serialize};

use super::domain::Career;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProjection {
    pub year_1: String,
    pub year_2: String,
    pub year_3: String,
    pub year_4: String,
    pub year_5: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u8,
    pub title: String,
    pub description: String,
    pub duration: String,
}

/// Salary curve, roadmap, skills, exams and institutions for one career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub salary_projection: SalaryProjection,
    pub roadmap: Vec<RoadmapStep>,
    pub required_skills: Vec<String>,
    pub suggested_exams: Vec<String>,
    pub suggested_colleges: Vec<String>,
}

impl Enrichment {
    pub fn for_career(career: Career) -> Self {
        let data = career_data(career);
        let [year_1, year_2, year_3, year_4, year_5] = data.salary.map(str::to_string);

        Self {
            salary_projection: SalaryProjection {
                year_1,
                year_2,
                year_3,
                year_4,
                year_5,
            },
            roadmap: data
                .roadmap
                .iter()
                .zip(1u8..)
                .map(|((title, description, duration), step)| RoadmapStep {
                    step,
                    title: (*title).to_string(),
                    description: (*description).to_string(),
                    duration: (*duration).to_string(),
                })
                .collect(),
            required_skills: owned(data.skills),
            suggested_exams: owned(data.exams),
            suggested_colleges: owned(data.colleges),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

struct CareerData {
    salary: [&'static str; 5],
    roadmap: &'static [(&'static str, &'static str, &'static str)],
    skills: &'static [&'static str],
    exams: &'static [&'static str],
    colleges: &'static [&'static str],
}

fn career_data(career: Career) -> CareerData {
    match career {
        Career::It => CareerData {
            salary: ["₹4-8 LPA", "₹6-12 LPA", "₹10-18 LPA", "₹14-25 LPA", "₹18-35 LPA"],
            roadmap: &[
                ("Learn Programming Fundamentals", "Master one language (Python/Java/JavaScript). Complete DSA basics on LeetCode/GeeksForGeeks.", "3 months"),
                ("Build Projects & Portfolio", "Build 3-5 real projects. Create GitHub portfolio. Learn Git, APIs, databases.", "3 months"),
                ("Learn Frameworks & Tools", "Pick a stack (MERN/Spring Boot/Django). Learn Docker, cloud basics (AWS/GCP).", "2 months"),
                ("DSA & Interview Prep", "Solve 200+ LeetCode problems. Practice system design. Mock interviews.", "3 months"),
                ("Apply & Network", "Apply on LinkedIn, Naukri, AngelList. Attend hackathons. Get referrals.", "1 month"),
            ],
            skills: &[
                "Data Structures & Algorithms",
                "Programming (Python/Java/JS)",
                "Web Development (React/Node)",
                "Database Management (SQL/NoSQL)",
                "System Design",
                "Cloud Computing (AWS/GCP)",
                "Version Control (Git)",
                "Problem Solving",
            ],
            exams: &["GATE CS", "Google Kickstart", "CodeChef/Codeforces", "AWS Certification", "Company-specific OAs"],
            colleges: &[
                "IIT Bombay/Delhi/Madras (B.Tech/M.Tech)",
                "NIT Trichy/Warangal/Surathkal",
                "IIIT Hyderabad / BITS Pilani",
                "Top product companies (Google, Microsoft, Amazon)",
            ],
        },
        Career::Mba => CareerData {
            salary: ["₹8-15 LPA", "₹10-20 LPA", "₹14-28 LPA", "₹18-35 LPA", "₹22-50 LPA"],
            roadmap: &[
                ("CAT/XAT/GMAT Preparation", "Join coaching (IMS/TIME/CL) or self-study. Target 95+ percentile in CAT.", "6-8 months"),
                ("Build Profile", "Gain 2-3 years work experience. Get leadership roles. Volunteer work.", "Ongoing"),
                ("Application & Essays", "Research IIMs, XLRI, ISB, FMS. Write compelling SOPs and essays.", "2 months"),
                ("GD/PI Preparation", "Current affairs, case studies, mock GDs and PIs.", "2 months"),
                ("Specialization Planning", "Research Finance, Marketing, Operations, HR tracks. Network with alumni.", "1 month"),
            ],
            skills: &[
                "Quantitative Aptitude",
                "Verbal Ability & Reading Comprehension",
                "Logical Reasoning",
                "Data Interpretation",
                "Leadership & Teamwork",
                "Communication Skills",
                "Business Acumen",
                "Current Affairs",
            ],
            exams: &["CAT", "XAT", "GMAT", "NMAT", "SNAP", "IIFT"],
            colleges: &[
                "IIM Ahmedabad / Bangalore / Calcutta",
                "IIM Lucknow / Indore / Kozhikode",
                "XLRI Jamshedpur / FMS Delhi",
                "ISB Hyderabad / IIM Udaipur (1-year)",
            ],
        },
        Career::Government => CareerData {
            salary: ["₹5-8 LPA", "₹5.5-9 LPA", "₹6-10 LPA", "₹7-12 LPA", "₹8-15 LPA"],
            roadmap: &[
                ("Choose Your Exam", "UPSC CSE, SSC CGL, Banking (IBPS/SBI), State PSC, Railways. Pick based on your eligibility.", "1 month"),
                ("Foundation Building", "NCERT books (6-12), basic GK, aptitude. Join coaching if needed (Unacademy/BYJU's).", "3 months"),
                ("Subject Deep Dive", "Cover full syllabus. Make notes. Previous year papers analysis.", "6 months"),
                ("Test Series & Revision", "Join test series. Weekly full-length mocks. Analyze mistakes.", "3 months"),
                ("Prelims → Mains → Interview", "Clear each stage. Personality test prep for UPSC. Document verification.", "6-12 months"),
            ],
            skills: &[
                "General Knowledge & Current Affairs",
                "Quantitative Aptitude",
                "English Language",
                "Logical Reasoning",
                "Indian Polity & Constitution",
                "Indian Economy",
                "History & Geography",
                "Essay Writing",
            ],
            exams: &["UPSC CSE", "SSC CGL", "IBPS PO", "SBI PO", "RBI Grade B", "State PSC"],
            colleges: &[
                "LBSNAA (IAS Training)",
                "SVPNPA (IPS Training)",
                "Reserve Bank of India",
                "State Administrative Services",
            ],
        },
        Career::Startup => CareerData {
            salary: ["₹0-5 LPA", "₹0-10 LPA", "₹5-20 LPA", "₹10-40 LPA", "₹15-100+ LPA"],
            roadmap: &[
                ("Ideation & Validation", "Identify problems worth solving. Talk to 50+ potential customers. Validate demand.", "2 months"),
                ("MVP Development", "Build minimum viable product. Use no-code tools if needed. Get first 10 users.", "2 months"),
                ("Early Traction", "Get to 100+ users. Iterate based on feedback. Find product-market fit.", "3 months"),
                ("Funding & Team", "Apply to incubators (IIT, NSRCEL, T-Hub). Pitch to angels. Build core team.", "3 months"),
                ("Scale & Growth", "Optimize unit economics. Hiring. Series A preparation. Scale marketing.", "6 months"),
            ],
            skills: &[
                "Product Thinking",
                "Sales & Marketing",
                "Financial Planning",
                "Leadership & Team Building",
                "Technical Skills (Full-Stack/No-Code)",
                "Fundraising & Pitching",
                "Customer Development",
                "Growth Hacking",
            ],
            exams: &[
                "No specific exams - focus on building",
                "Y Combinator Application",
                "Shark Tank India (if applicable)",
            ],
            colleges: &[
                "IIT/IIM Incubators",
                "NSRCEL (IIM Bangalore)",
                "T-Hub Hyderabad",
                "Startup India Hub",
                "Y Combinator / Techstars (global)",
            ],
        },
        Career::HigherStudies => CareerData {
            salary: [
                "₹0 (Stipend ₹30-50K/mo)",
                "₹0 (Stipend ₹35-60K/mo)",
                "₹8-15 LPA",
                "₹10-20 LPA",
                "₹14-30 LPA",
            ],
            roadmap: &[
                ("Choose Exam & Specialization", "GATE, NET, JAM, or direct admission. Pick M.Tech/M.Sc/PhD path.", "1 month"),
                ("Exam Preparation", "GATE: Focus on core subjects + aptitude. Target AIR under 500 for IITs.", "6 months"),
                ("College Selection", "Research IITs, IISc, NITs, IIITs. Check placement records and research labs.", "1 month"),
                ("Research & Thesis", "Choose research area. Publish papers. Build academic network.", "12-18 months"),
                ("Placement/PhD Application", "Campus placements or apply for PhD positions. Build research profile.", "3 months"),
            ],
            skills: &[
                "Core Subject Expertise",
                "Research Methodology",
                "Academic Writing",
                "GATE/NET Exam Skills",
                "Programming (for CS/IT)",
                "Lab Work & Experimentation",
                "Paper Reading & Review",
                "Presentation Skills",
            ],
            exams: &["GATE", "UGC NET", "CSIR NET", "IIT JAM", "JEST"],
            colleges: &[
                "IISc Bangalore",
                "IIT Bombay/Delhi/Madras/Kanpur",
                "TIFR / ISI Kolkata",
                "JNU / Delhi University",
            ],
        },
        Career::MsAbroad => CareerData {
            salary: ["$0 (Studying)", "$60-90K/year", "$75-120K/year", "$90-150K/year", "$100-180K/year"],
            roadmap: &[
                ("GRE & TOEFL/IELTS Prep", "Target GRE 320+, TOEFL 100+ or IELTS 7.5+. Use Magoosh/ETS material.", "3 months"),
                ("University Shortlisting", "Research universities (US/Canada/Germany/UK). Check admit chances on Yocket/Admits.fyi.", "2 months"),
                ("SOP, LORs & Application", "Write compelling SOPs. Get 3 strong LORs. Apply to 8-12 universities.", "3 months"),
                ("Funding & Visa", "Apply for scholarships, TA/RA positions. Education loan. F1/student visa.", "3 months"),
                ("Pre-Departure", "Housing, bank account, health insurance. Connect with seniors at target university.", "2 months"),
            ],
            skills: &[
                "GRE Verbal & Quant",
                "TOEFL/IELTS English Proficiency",
                "Research Experience",
                "Academic Writing (SOP)",
                "Core Domain Knowledge",
                "Programming & Tools",
                "Networking & Communication",
                "Cross-Cultural Adaptability",
            ],
            exams: &["GRE General", "TOEFL iBT", "IELTS Academic", "GRE Subject (optional)"],
            colleges: &[
                "MIT / Stanford / CMU (US)",
                "UC Berkeley / Georgia Tech / UIUC",
                "ETH Zurich / TU Munich (Europe)",
                "University of Toronto / UBC (Canada)",
            ],
        },
        Career::DataScience => CareerData {
            salary: ["₹6-12 LPA", "₹10-18 LPA", "₹15-28 LPA", "₹20-40 LPA", "₹25-60 LPA"],
            roadmap: &[
                ("Learn Python & Math Foundations", "Master Python, NumPy, Pandas. Study linear algebra, probability, and statistics.", "3 months"),
                ("Machine Learning & Deep Learning", "Complete Andrew Ng's ML course. Learn scikit-learn, TensorFlow/PyTorch. Build 5+ ML projects.", "4 months"),
                ("Data Engineering & Tools", "Learn SQL, Spark, Airflow. Cloud platforms (AWS SageMaker, GCP Vertex AI). Data visualization.", "2 months"),
                ("Portfolio & Kaggle", "Compete on Kaggle (target Expert/Master). Build GitHub portfolio. Write technical blogs.", "3 months"),
                ("Interview Prep & Placement", "Practice ML system design, statistics questions, and coding. Apply on LinkedIn, Naukri, AngelList.", "2 months"),
            ],
            skills: &[
                "Python & R Programming",
                "Statistics & Probability",
                "Machine Learning & Deep Learning",
                "SQL & Data Engineering",
                "Data Visualization (Tableau/Power BI)",
                "Cloud Platforms (AWS/GCP/Azure)",
                "NLP & Computer Vision",
                "Git & MLOps",
            ],
            exams: &[
                "Google Data Analytics Certificate",
                "AWS ML Specialty",
                "TensorFlow Developer Certificate",
                "Kaggle Competitions",
                "Microsoft Azure AI Fundamentals",
            ],
            colleges: &[
                "IIT Madras (BS in Data Science)",
                "ISI Kolkata / CMI Chennai",
                "IIT Bombay / Delhi (M.Tech AI/ML)",
                "IIIT Hyderabad (ML Lab)",
            ],
        },
        Career::Creative => CareerData {
            salary: ["₹3-6 LPA", "₹5-10 LPA", "₹8-16 LPA", "₹12-24 LPA", "₹15-35 LPA"],
            roadmap: &[
                ("Learn Design Fundamentals", "Study color theory, typography, layout principles. Start with Canva, move to Figma/Adobe XD.", "2 months"),
                ("Master Your Tools", "Learn Adobe Photoshop, Illustrator, Premiere Pro or After Effects. Practice daily.", "3 months"),
                ("Build Portfolio & Freelance", "Create 10-15 portfolio pieces. Start freelancing on Fiverr/Upwork/Behance. Build personal brand.", "3 months"),
                ("Specialize & Network", "Pick a niche: UI/UX, motion graphics, branding, or 3D. Attend design meetups and conferences.", "3 months"),
                ("Full-Time Roles or Studio", "Apply to design agencies, startups, or MNCs. Consider starting your own design studio.", "2 months"),
            ],
            skills: &[
                "UI/UX Design (Figma, Adobe XD)",
                "Visual Design & Typography",
                "Adobe Creative Suite (Photoshop, Illustrator)",
                "Motion Graphics & Video Editing",
                "Design Thinking & User Research",
                "Branding & Identity Design",
                "HTML/CSS Basics",
                "Portfolio Presentation",
            ],
            exams: &[
                "NID DAT",
                "NIFT Entrance",
                "UCEED",
                "Google UX Design Certificate",
                "Adobe Certified Professional",
            ],
            colleges: &[
                "NID Ahmedabad / Bangalore",
                "NIFT Delhi / Mumbai",
                "Srishti Manipal Institute of Art",
                "IDC IIT Bombay (M.Des)",
            ],
        },
        Career::Healthcare => CareerData {
            salary: ["₹0 (Internship)", "₹5-10 LPA", "₹8-15 LPA", "₹12-25 LPA", "₹18-50 LPA"],
            roadmap: &[
                ("NEET Preparation", "Study NCERT Biology, Physics, Chemistry. Join coaching (Allen/Aakash) or self-study via PW/Unacademy.", "12 months"),
                ("MBBS/BDS Admission", "Secure seat in govt medical college (AIIMS/JIPMER) or private college. Complete 5.5 years MBBS.", "5.5 years"),
                ("Internship (CRRI)", "Complete 1-year compulsory rotating internship. Gain hands-on clinical experience.", "1 year"),
                ("PG Entrance (NEET PG/INI CET)", "Prepare for NEET PG or INI CET for MD/MS specialization. Choose your specialty.", "6-12 months"),
                ("Specialization & Practice", "Complete MD/MS (3 yrs). Super-specialization (DM/MCh) optional. Start practice or join hospital.", "3+ years"),
            ],
            skills: &[
                "Biology & Human Anatomy",
                "Clinical Skills & Diagnosis",
                "Pharmacology & Medicine",
                "Patient Communication",
                "Research Methodology",
                "Medical Ethics",
                "Emergency Medicine Basics",
                "Public Health Awareness",
            ],
            exams: &["NEET UG", "NEET PG", "INI CET", "AIIMS PG", "USMLE (for abroad)", "PLAB (UK)"],
            colleges: &[
                "AIIMS Delhi / Jodhpur / Rishikesh",
                "JIPMER Puducherry",
                "CMC Vellore / Manipal Academy",
                "KGMU Lucknow / BHU Varanasi",
            ],
        },
    }
}

use super::domain::{Question, QuestionCategory, QuestionId};

/// Built-in catalog of the 30 assessment questions.
///
/// Ids and display orders both run 1..=30 so the bank lines up with the standard feature map.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut questions = questions;
        questions.sort_by_key(|question| question.display_order);
        Self { questions }
    }

    pub fn standard() -> Self {
        let questions = STANDARD_QUESTIONS
            .iter()
            .zip(1u32..)
            .map(|((category, prompt, options), order)| Question {
                id: QuestionId(u64::from(order)),
                display_order: order,
                category: *category,
                prompt: (*prompt).to_string(),
                options: options.iter().map(|label| (*label).to_string()).collect(),
            })
            .collect();
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

type QuestionRow = (QuestionCategory, &'static str, &'static [&'static str]);

const STANDARD_QUESTIONS: [QuestionRow; 30] = [
    (
        QuestionCategory::Academic,
        "How did you perform in your 10th board exams?",
        &["Below 60%", "60-75%", "75-85%", "85-95%", "95%+"],
    ),
    (
        QuestionCategory::Academic,
        "What stream did you pick in 11th/12th?",
        &[
            "PCM (Physics, Chemistry, Maths)",
            "PCB (Physics, Chemistry, Biology)",
            "Commerce (with Maths)",
            "Commerce (without Maths)",
            "Arts / Humanities",
        ],
    ),
    (
        QuestionCategory::Academic,
        "What are you studying (or did you study) in college?",
        &[
            "Computer Science / IT",
            "Other Engineering (Mech/Civil/ECE/EEE)",
            "B.Com / BBA / Economics",
            "B.Sc (Science)",
            "BA / Other",
        ],
    ),
    (
        QuestionCategory::Academic,
        "How are your college grades looking?",
        &[
            "Below 6.0 / 55%",
            "6.0-7.0 / 55-65%",
            "7.0-8.0 / 65-75%",
            "8.0-9.0 / 75-85%",
            "9.0+ / 85%+",
        ],
    ),
    (
        QuestionCategory::Academic,
        "Have you taken any competitive exams so far?",
        &[
            "No, never",
            "JEE / NEET (engineering/medical entrance)",
            "CAT / XAT / GMAT (MBA entrance)",
            "GATE / NET / JAM (higher studies)",
            "UPSC / SSC / Banking exams",
        ],
    ),
    (
        QuestionCategory::Academic,
        "How comfortable are you with coding and tech?",
        &[
            "No coding knowledge",
            "Basic (know one language)",
            "Intermediate (built small projects)",
            "Advanced (internship/work experience)",
            "Expert (open source/competitive programming)",
        ],
    ),
    (
        QuestionCategory::Academic,
        "How confident are you with English?",
        &[
            "Basic (can read/write simple sentences)",
            "Intermediate (comfortable in conversation)",
            "Advanced (can write essays, present confidently)",
            "Fluent (near-native, IELTS 7+ equivalent)",
        ],
    ),
    (
        QuestionCategory::Academic,
        "Have you done any internships or jobs so far?",
        &[
            "No experience",
            "1-2 internships",
            "1-2 years full-time work",
            "3+ years work experience",
        ],
    ),
    (
        QuestionCategory::Financial,
        "Do you have any education loan to repay?",
        &[
            "No loan",
            "Small loan (under ₹5 lakh)",
            "Medium loan (₹5-15 lakh)",
            "Large loan (₹15 lakh+)",
        ],
    ),
    (
        QuestionCategory::Financial,
        "How many people in your family will depend on your income?",
        &[
            "None (financially independent family)",
            "1-2 members",
            "3-4 members",
            "5+ members (sole breadwinner expected)",
        ],
    ),
    (
        QuestionCategory::Financial,
        "How soon do you need to start earning?",
        &[
            "No urgency, can study/prepare for 2-3 years",
            "Preferably within 1 year but flexible",
            "Yes, must earn within 1 year",
            "Yes, urgently need income within 6 months",
        ],
    ),
    (
        QuestionCategory::Financial,
        "Could your family manage MBA-level fees (₹20 lakh+)?",
        &[
            "Yes, comfortably",
            "Yes, with some financial strain",
            "Only with full education loan",
            "No, cannot afford",
        ],
    ),
    (
        QuestionCategory::Financial,
        "What's your family's approximate annual income?",
        &[
            "Below ₹3 lakh",
            "₹3-8 lakh",
            "₹8-15 lakh",
            "₹15-30 lakh",
            "₹30 lakh+",
        ],
    ),
    (
        QuestionCategory::Financial,
        "Where did you grow up?",
        &[
            "Rural / small town",
            "Tier-2/3 city",
            "Tier-1 city (Delhi, Mumbai, Bangalore, etc.)",
            "Metro with strong professional network",
        ],
    ),
    (
        QuestionCategory::Personality,
        "How do you feel about taking risks in your career?",
        &[
            "Very risk-averse (prefer guaranteed outcomes)",
            "Low risk (small calculated risks only)",
            "Moderate (balanced approach)",
            "High risk (comfortable with uncertainty)",
            "Very high risk (thrive in chaos)",
        ],
    ),
    (
        QuestionCategory::Personality,
        "Do you see yourself leading and managing teams?",
        &[
            "No, I prefer individual work",
            "Somewhat, in small teams",
            "Yes, I enjoy leading teams",
            "Absolutely, I want to build organizations",
        ],
    ),
    (
        QuestionCategory::Personality,
        "What matters more to you: job security or fast growth?",
        &[
            "Strong stability (pension, job security)",
            "Stability with moderate growth",
            "Growth with some stability",
            "Maximum growth (even if risky)",
        ],
    ),
    (
        QuestionCategory::Personality,
        "How do you deal with pressure and tight deadlines?",
        &[
            "I avoid stressful situations",
            "I manage but prefer low-stress",
            "I handle stress well",
            "I perform best under pressure",
        ],
    ),
    (
        QuestionCategory::Personality,
        "How important is having free time outside of work?",
        &[
            "Extremely important (9-to-5 preferred)",
            "Important but flexible",
            "Willing to sacrifice for career growth",
            "Will work 80+ hours if passionate",
        ],
    ),
    (
        QuestionCategory::Personality,
        "Do you prefer solving new problems or following proven methods?",
        &[
            "Prefer following established processes",
            "Mix of both",
            "Enjoy solving new problems",
            "Love creating new solutions from scratch",
        ],
    ),
    (
        QuestionCategory::Personality,
        "How do you feel about constantly learning new things?",
        &[
            "Prefer to learn once and apply",
            "Open to occasional learning",
            "Enjoy regular learning and courses",
            "Passionate about constant learning",
        ],
    ),
    (
        QuestionCategory::Personality,
        "How do you feel about speaking in front of people?",
        &[
            "Very uncomfortable",
            "Nervous but can manage",
            "Comfortable and experienced",
            "Excellent, enjoy presenting",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "How much does a government job (IAS/IPS/Banking) appeal to you?",
        &[
            "Not interested at all",
            "Slightly interested",
            "Moderately interested",
            "Very interested",
            "It's my dream",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "Have you thought about starting your own business?",
        &[
            "Not interested",
            "Maybe someday",
            "Actively thinking about it",
            "Already working on an idea",
            "Already have a side project/startup",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "How excited are you about working at a big company or MNC?",
        &[
            "Not interested",
            "As a backup option",
            "Good option for me",
            "My primary goal",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "Would you like to pursue Masters or PhD in India?",
        &[
            "No",
            "Maybe after some work experience",
            "Yes, planning to apply",
            "Absolutely, research is my passion",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "Do you dream of studying or working outside India?",
        &[
            "No, I want to stay in India",
            "Open to it but not actively pursuing",
            "Yes, actively preparing (GRE/TOEFL)",
            "Definitely going abroad",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "What kind of starting salary would make you happy?",
        &[
            "₹2-4 LPA (just need a job)",
            "₹4-8 LPA (decent start)",
            "₹8-15 LPA (competitive package)",
            "₹15-25 LPA (premium placement)",
            "₹25 LPA+ or $60K+ (top-tier)",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "Which field gets you the most excited?",
        &[
            "Technology / Software",
            "Finance / Banking / Consulting",
            "Government / Public Service",
            "Healthcare / Pharma",
            "Education / Research",
        ],
    ),
    (
        QuestionCategory::CareerInterest,
        "Imagine yourself 10 years from now: what do you see?",
        &[
            "Senior engineer at a top tech company",
            "Business leader / VP at a corporation",
            "Government officer (IAS/IPS/IFS)",
            "Running my own successful company",
            "Professor / Researcher at a top institution",
            "Living abroad with a high-paying job",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::features::FeatureMap;

    #[test]
    fn every_option_has_a_feature_mapping() {
        let bank = QuestionBank::standard();
        let map = FeatureMap::standard();
        assert_eq!(bank.len(), 30);

        for question in bank.questions() {
            for option in 0..question.options.len() {
                assert!(
                    map.lookup(question.display_order, option).is_some(),
                    "question {} option {option} unmapped",
                    question.display_order
                );
            }
            assert!(map.lookup(question.display_order, question.options.len()).is_none());
        }
    }

    #[test]
    fn ids_match_display_order() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            assert_eq!(question.id.0, u64::from(question.display_order));
        }
        assert_eq!(
            bank.get(QuestionId(27)).map(|question| question.category),
            Some(QuestionCategory::CareerInterest)
        );
    }
}

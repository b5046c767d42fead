//! Career tips shown under a prediction

use rand::Rng;

pub const CAREER_TIPS: [&str; 10] = [
    "Keep documentation of your achievements and discuss your career goals with your manager regularly.",
    "Seek feedback from peers and supervisors to continuously improve your performance.",
    "Take on new challenges and responsibilities to demonstrate your capabilities.",
    "Stay updated with industry trends and enhance your skills through continuous learning.",
    "Network with colleagues and industry professionals to expand your opportunities.",
    "Maintain a positive attitude and be a team player to build strong professional relationships.",
    "Set clear career goals and create a plan to achieve them.",
    "Be proactive in seeking out opportunities for growth and development.",
    "Showcase your problem-solving skills by taking initiative on projects.",
    "Communicate effectively and keep your manager informed about your progress and achievements.",
];

/// Pick a tip uniformly at random.
pub fn random_tip() -> &'static str {
    let idx = rand::rng().random_range(0..CAREER_TIPS.len());
    CAREER_TIPS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tip_comes_from_the_list() {
        for _ in 0..20 {
            assert!(CAREER_TIPS.contains(&random_tip()));
        }
    }
}

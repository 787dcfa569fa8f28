//! Page sections, top to bottom

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

/// Inline `transition-delay` for the `index`-th card of a staggered grid
pub(crate) fn stagger_style(index: usize, step_ms: u32) -> String {
    let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
    format!("transition-delay: {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::stagger_style;

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0, 40), "transition-delay: 0ms");
        assert_eq!(stagger_style(3, 40), "transition-delay: 120ms");
        assert_eq!(stagger_style(2, 120), "transition-delay: 240ms");
    }
}

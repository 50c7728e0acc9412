mod about;
mod certifications;
mod contact;
mod experience;
mod filter_bar;
mod footer;
mod header;
mod hero;
pub mod icons;
mod mobile_nav;
mod particle_background;
mod project_card;
mod project_detail;
mod project_grid;
mod projects;
mod reveal;
mod section_heading;
mod sidebar;
mod skills;
mod theme_toggle;

pub use about::About;
pub use certifications::{Certifications, NO_CERTIFICATIONS};
pub use contact::Contact;
pub use experience::Experience;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use mobile_nav::MobileNav;
pub use particle_background::ParticleBackground;
pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects::Projects;
pub use reveal::{Reveal, RevealLatch};
pub use section_heading::SectionHeading;
pub use sidebar::Sidebar;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;

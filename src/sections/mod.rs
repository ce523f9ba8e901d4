pub mod aarti;
pub mod hero;
pub mod page;
pub mod verse;

pub use aarti::AartiSection;
pub use hero::HeroSection;
pub use page::Page;
pub use verse::VerseSection;

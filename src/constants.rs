/// Page wiring and timing constants.
///
/// Element ids, class names and delays used by the browser glue. Simulation
/// tuning lives in `ParticleParams::default()`.
// Canvas
pub const CANVAS_ID: &str = "particles-canvas";
pub const GLOW_BLUR_PX: f64 = 15.0;
pub const LINK_WIDTH_PX: f64 = 0.5;
pub const PARTICLE_SEED: u64 = 0x5EED_CAFE;

// Sections
pub const INITIAL_SECTION: &str = "home";
pub const SECTION_ID_PREFIX: &str = "page-";
pub const SECTION_SELECTOR: &str = r#"section[id^="page-"]"#;
pub const TRANSITION_DELAY_MS: i32 = 300; // cross-fade before the swap
pub const INITIAL_REVEAL_DELAY_MS: i32 = 100;
pub const INITIAL_REVEAL_SELECTOR: &str =
    "#page-home .reveal, #page-home .hero-stat, #page-home .hero-badge";

// Reveal observer
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_SHOW: &str = "show";

// Content mounts
pub const STATS_MOUNT: &str = "hero-stats";
pub const PROJECTS_MOUNT: &str = "projects-grid";
pub const SKILLS_MOUNT: &str = "skills-grid";
pub const CONTACT_MOUNT: &str = "contact-grid";
pub const SPOTLIGHT_SELECTOR: &str = ".project-card, .skill-category";

// Toast
pub const TOAST_ID: &str = "toast";
pub const TOAST_DURATION_MS: i32 = 3000;

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_RELAY_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";
pub const TOAST_SENT: &str = "Message envoyé avec succès !";
pub const TOAST_SEND_FAILED: &str = "Échec de l'envoi, réessayez plus tard.";
pub const TOAST_EMAIL_COPIED: &str = "Email copié !";

// News feed
pub const NEWS_DATA_URL: &str = "cyber-news/data.json";
pub const NEWS_FEED_MOUNT: &str = "news-feed";
pub const NEWS_META_MOUNT: &str = "news-meta";
pub const NEWS_SCRIPT_MOUNT: &str = "news-script";
pub const NEWS_AUDIO_MOUNT: &str = "news-audio";
pub const NEWS_CARD_SELECTOR: &str = "#news-feed .news-card.reveal";

//! Page metadata shared by the `<head>` tags and the sitemap.

use chrono::{DateTime, Utc};

pub const SITE_URL: &str = "https://www.thiere18.studio";

pub const TITLE: &str = "Thierno Ibrahima LO | Senior Backend & DevOps Engineer";
pub const DESCRIPTION: &str = "Backend engineer and system architect specialized in Golang, Python, Kubernetes, and distributed systems. Building scalable production systems from Dakar, Senegal.";
pub const AUTHOR: &str = "Thierno Ibrahima LO";
pub const KEYWORDS: [&str; 8] = [
    "Backend Engineer",
    "DevOps",
    "Golang",
    "Python",
    "Kubernetes",
    "Microservices",
    "Distributed Systems",
    "Freelance Developer",
];

pub const OG_TITLE: &str = TITLE;
pub const OG_DESCRIPTION: &str =
    "Backend engineer specialized in building scalable systems with Golang and Python";
pub const OG_TYPE: &str = "website";
pub const OG_LOCALE: &str = "en_US";

pub const TWITTER_CARD: &str = "summary_large_image";
pub const TWITTER_TITLE: &str = TITLE;
pub const TWITTER_DESCRIPTION: &str = "Backend engineer specialized in building scalable systems";

pub fn keywords() -> String {
    KEYWORDS.join(", ")
}

/// When this build of the site was produced.
pub fn build_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_joined() {
        let k = keywords();
        assert!(k.starts_with("Backend Engineer, DevOps"));
        assert_eq!(k.matches(", ").count(), KEYWORDS.len() - 1);
    }

    #[test]
    fn test_build_time_is_stamped() {
        // build.rs always provides a parseable timestamp
        assert!(DateTime::parse_from_rfc3339(env!("BUILD_TIME")).is_ok());
        assert!(build_time() <= Utc::now());
    }
}

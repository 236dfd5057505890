use std::{
    fmt,
    io::{self, Cursor, Write},
    string::FromUtf8Error,
};

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use thiserror::Error;

use crate::site::{build_time, SITE_URL};

pub const URL_PATH: &str = "/sitemap.xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Invalid priority {priority} for sitemap entry `{loc}`")]
    InvalidPriority { loc: String, priority: f32 },
    #[error("Couldn't write sitemap: {0}")]
    Write(#[from] io::Error),
    #[error("Sitemap is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    /// Between 0.0 and 1.0.
    pub priority: f32,
}

/// The single page this site publishes.
pub fn default_entries() -> Vec<SitemapEntry> {
    vec![SitemapEntry {
        loc: SITE_URL.to_string(),
        last_modified: build_time(),
        change_frequency: ChangeFrequency::Monthly,
        priority: 1.0,
    }]
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Finite priorities are clamped into `0.0..=1.0`; NaN and infinities are rejected.
fn checked_priority(entry: &SitemapEntry) -> Result<f32, SitemapError> {
    if entry.priority.is_finite() {
        Ok(entry.priority.clamp(0.0, 1.0))
    } else {
        Err(SitemapError::InvalidPriority {
            loc: entry.loc.clone(),
            priority: entry.priority,
        })
    }
}

/// Renders entries as a sitemaps.org `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;
    for entry in entries {
        let priority = checked_priority(entry)?;
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(
            &mut writer,
            "lastmod",
            &entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text_element(
            &mut writer,
            "changefreq",
            &entry.change_frequency.to_string(),
        )?;
        write_text_element(&mut writer, "priority", &format!("{priority:.1}"))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_entry() {
        let entries = default_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "https://www.thiere18.studio");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Monthly);
        assert_eq!(entries[0].priority, 1.0);
    }

    #[test]
    fn test_render_sitemap() {
        let entry = SitemapEntry {
            loc: "https://example.com/?a=1&b=2".to_string(),
            last_modified: Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 1.0,
        };
        let xml = render_sitemap(&[entry]).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<lastmod>2025-03-04T05:06:07Z</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_priority_is_clamped() {
        let entry = SitemapEntry {
            loc: SITE_URL.to_string(),
            last_modified: Utc::now(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 3.0,
        };
        let xml = render_sitemap(&[entry]).unwrap();
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_empty_sitemap() {
        let xml = render_sitemap(&[]).unwrap();
        assert!(!xml.contains("<url>"));
        assert!(xml.contains("<urlset"));
    }

    #[test]
    fn test_non_finite_priority_is_rejected() {
        for priority in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let entry = SitemapEntry {
                loc: SITE_URL.to_string(),
                last_modified: Utc::now(),
                change_frequency: ChangeFrequency::Monthly,
                priority,
            };
            match render_sitemap(&[entry]) {
                Err(SitemapError::InvalidPriority { loc, .. }) => assert_eq!(loc, SITE_URL),
                other => panic!("expected invalid priority for {priority}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_markup_in_loc_is_escaped() {
        let entry = SitemapEntry {
            loc: "https://example.com/<script>".to_string(),
            last_modified: Utc::now(),
            change_frequency: ChangeFrequency::Never,
            priority: 0.5,
        };
        let xml = render_sitemap(&[entry]).unwrap();
        assert!(xml.contains("<loc>https://example.com/&lt;script&gt;</loc>"));
        assert!(!xml.contains("<script>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_default_sitemap_renders() {
        let xml = render_sitemap(&default_entries()).unwrap();
        assert!(xml.contains(&format!("<urlset xmlns=\"{SITEMAP_NS}\">")));
        assert!(xml.contains("<loc>https://www.thiere18.studio</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }
}

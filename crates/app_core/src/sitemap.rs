//! Search engine files: sitemap.xml and robots.txt

use crate::model::Project;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Public pages listed ahead of the projects
pub const STATIC_ROUTES: [&str; 5] = ["", "about", "services", "contact", "portfolio"];

pub fn generate_sitemap(origin: &str, projects: &[Project], today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
    );

    for route in STATIC_ROUTES {
        let priority = if route.is_empty() { "1.0" } else { "0.8" };
        push_url(&mut xml, &format!("{}/{}", origin, route), &today, "monthly", priority);
    }

    for project in projects {
        push_url(
            &mut xml,
            &format!("{}/portfolio/{}", origin, project.slug),
            &project.date,
            "never",
            "0.9",
        );
    }

    xml.push_str("\n</urlset>");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    // Writing into a String cannot fail
    let _ = write!(
        xml,
        "\n  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
         <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
        escape_xml(loc),
        escape_xml(lastmod),
        changefreq,
        priority
    );
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn generate_robots(origin: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\n\nSitemap: {}/sitemap.xml",
        origin
    )
}

/// Write `content` to `dir/file`, creating `dir` if needed
pub fn export(dir: &Path, file: &str, content: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file);
    std::fs::write(&path, content)?;
    tracing::info!("Exported {:?} ({} bytes)", path, content.len());
    Ok(path)
}

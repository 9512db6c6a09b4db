//! Pre-publish checks for Jekyll post files.
//!
//! A post is `_posts/YYYY-MM-DD-slug.md` starting with a `---` delimited
//! front matter block that carries at least `title` and `date`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^(\d{4})-(\d{2})-(\d{2})-(.+)\.md$")
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?m)^title:(.*)$")
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?m)^date:(.*)$")
}

fn categories_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?m)^categories:[ \t]*\r?\n((?:[ \t]+-[ \t]+.+\r?\n?)+)")
}

fn teaser_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?m)teaser:(.*)$")
}

/// Date and slug encoded in a post's filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostName {
    pub year: String,
    pub month: String,
    pub day: String,
    pub slug: String,
}

impl PostName {
    pub fn parse(file_name: &str) -> Result<Self> {
        let caps = filename_re()
            .captures(file_name)
            .ok_or_else(|| Error::BadFilename(file_name.to_owned()))?;
        Ok(Self {
            year: caps[1].to_owned(),
            month: caps[2].to_owned(),
            day: caps[3].to_owned(),
            slug: caps[4].to_owned(),
        })
    }

    /// `/{year}/{month}/{Slug In Title Case}/`.
    pub fn permalink(&self) -> String {
        format!("/{}/{}/{}/", self.year, self.month, title_case(&self.slug.replace('-', " ")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub has_categories: bool,
    pub teaser: Option<String>,
}

impl FrontMatter {
    /// Extract the front matter fields from a whole post.
    pub fn parse(content: &str) -> Result<Self> {
        if !content.starts_with("---") {
            return Err(Error::FrontMatter("file does not start with '---'"));
        }
        let end = content[3..]
            .find("\n---")
            .map(|i| i + 3)
            .ok_or(Error::FrontMatter("closing '---' not found"))?;
        // keep the newline before the closing delimiter so list items end cleanly
        let block = &content[..=end];

        let title = field(title_re(), block);
        let date = field(date_re(), block);

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if date.is_none() {
            missing.push("date");
        }
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        Ok(Self {
            title: title.unwrap_or_default(),
            date: date.unwrap_or_default(),
            has_categories: categories_re().is_match(block),
            teaser: field(teaser_re(), block),
        })
    }
}

/// A post that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReport {
    pub name: PostName,
    pub front: FrontMatter,
}

impl PostReport {
    pub fn preview(&self) -> String {
        let rule = "-".repeat(59);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "PREVIEW: {}", self.front.title);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Published:    {} (Year: {}, Month: {})",
            self.front.date, self.name.year, self.name.month
        );
        let _ = writeln!(out, "Permalink:    {}", self.name.permalink());
        let _ = writeln!(out, "Header Image: {}", self.front.teaser.as_deref().unwrap_or("None"));
        let _ = write!(out, "{rule}");
        out
    }
}

/// Validate the post at `path`: filename first, then front matter.
pub fn check_post(path: &Path) -> Result<PostReport> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let name = PostName::parse(file_name)?;
    log::debug!("filename ok: {file_name}");

    let content = fs::read_to_string(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let front = FrontMatter::parse(&content)?;
    Ok(PostReport { name, front })
}

/// First value of a `key: value` line, trimmed (this also drops the `\r` of
/// CRLF files) and unquoted. Blank values count as absent.
fn field(re: &Regex, block: &str) -> Option<String> {
    let caps = re.captures(block)?;
    let value = unquote(caps[1].trim()).trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename() {
        let name = PostName::parse("2024-03-09-hello-wasm-world.md").unwrap();
        assert_eq!(name.year, "2024");
        assert_eq!(name.month, "03");
        assert_eq!(name.day, "09");
        assert_eq!(name.slug, "hello-wasm-world");
        assert_eq!(name.permalink(), "/2024/03/Hello Wasm World/");
        assert!(matches!(PostName::parse("hello.md"), Err(Error::BadFilename(_))));
        assert!(PostName::parse("2024-3-09-x.md").is_err());
    }

    #[test]
    fn title_case_like_jekyll_preview() {
        assert_eq!(title_case("rust 2x faster"), "Rust 2X Faster");
        assert_eq!(title_case("sHOUTY"), "Shouty");
    }

    #[test]
    fn unquotes_matching_pairs_only() {
        assert_eq!(unquote("\"Hi\""), "Hi");
        assert_eq!(unquote("'Hi'"), "Hi");
        assert_eq!(unquote("\"Hi'"), "\"Hi'");
    }

    #[test]
    fn front_matter_fields() {
        let post = "---\ntitle: \"Particles in Rust\"\ndate: 2024-03-09\ncategories:\n  - Rust\n  - Web\nheader:\n  teaser: /assets/img/p.png\n---\nBody\n";
        let fm = FrontMatter::parse(post).unwrap();
        assert_eq!(fm.title, "Particles in Rust");
        assert_eq!(fm.date, "2024-03-09");
        assert!(fm.has_categories);
        assert_eq!(fm.teaser.as_deref(), Some("/assets/img/p.png"));
    }

    #[test]
    fn front_matter_fields_crlf() {
        let post = "---\r\ntitle: \"Hello\"\r\ndate: 2024-01-01\r\ncategories:\r\n  - Rust\r\n---\r\nBody\r\n";
        let fm = FrontMatter::parse(post).unwrap();
        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.date, "2024-01-01");
        assert!(fm.has_categories);
        assert_eq!(fm.teaser, None);
    }

    #[test]
    fn blank_title_is_missing() {
        let post = "---\ntitle:   \ndate: 2024-01-01\n---\n";
        assert!(matches!(FrontMatter::parse(post), Err(Error::MissingFields(f)) if f == ["title"]));
        let quoted = "---\ntitle: \"  \"\ndate: 2024-01-01\n---\n";
        assert!(matches!(FrontMatter::parse(quoted), Err(Error::MissingFields(f)) if f == ["title"]));
    }

    #[test]
    fn front_matter_errors() {
        assert!(matches!(FrontMatter::parse("title: x\n"), Err(Error::FrontMatter(_))));
        assert!(matches!(FrontMatter::parse("---\ntitle: x\n"), Err(Error::FrontMatter(_))));
        match FrontMatter::parse("---\nlayout: post\n---\n") {
            Err(Error::MissingFields(f)) => assert_eq!(f, ["title", "date"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fields_in_body_do_not_count() {
        let post = "---\ndate: 2024-01-01\n---\ntitle: not front matter\n";
        assert!(matches!(FrontMatter::parse(post), Err(Error::MissingFields(f)) if f == ["title"]));
    }
}

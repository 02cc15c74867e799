use super::*;

/// Title-case fallback only applies to lines shorter than this.
const MAX_TITLE_LINE_CHARS: usize = 50;

/// A titled span of document text. The body accumulates monotonically while
/// the scan runs; it is never rewritten.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Title-to-body mapping that iterates in first-insertion order, which is
/// document order. Duplicate titles merge their bodies by append.
#[derive(Debug, Default)]
pub struct SectionMap {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl SectionMap {
    pub fn single(title: &str, body: &str) -> Self {
        let mut map = Self::default();
        map.append(title, body);
        map
    }

    /// Appends text to the named section, creating it at the end of the
    /// iteration order if the title is new.
    pub fn append(&mut self, title: &str, text: &str) {
        let position = match self.index.get(title) {
            Some(&position) => position,
            None => {
                self.sections.push(Section {
                    title: title.to_string(),
                    body: String::new(),
                });
                let position = self.sections.len() - 1;
                self.index.insert(title.to_string(), position);
                position
            }
        };

        self.sections[position].body.push_str(text);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn get(&self, title: &str) -> Option<&Section> {
        self.index
            .get(title)
            .and_then(|&position| self.sections.get(position))
    }

    pub fn total_body_chars(&self) -> usize {
        self.sections
            .iter()
            .map(|section| char_len(&section.body))
            .sum()
    }
}

/// Ordered heading matchers, first match wins. Priority resolves ambiguity:
/// an all-caps line is a heading because it is tested before the generic
/// title-case fallback, not because it is a better match.
#[derive(Debug)]
pub struct HeadingMatchers {
    chapter_heading: Regex,
    numbered_heading: Regex,
    all_caps_heading: Regex,
    keyword_heading: Regex,
}

impl HeadingMatchers {
    pub fn new() -> Result<Self> {
        Ok(Self {
            chapter_heading: Regex::new(
                r"(?i)^(?:chapter|section)\s+(\d+(?:\.\d+)?)(?:\s*:\s*|\s+)(.+)$",
            )
            .context("failed to compile chapter heading regex")?,
            numbered_heading: Regex::new(r"^(\d+(?:\.\d+)?)\s+(.+)$")
                .context("failed to compile numbered heading regex")?,
            all_caps_heading: Regex::new(r"^([A-Z][A-Z\s]{4,})$")
                .context("failed to compile all-caps heading regex")?,
            keyword_heading: Regex::new(
                r"(?i)^(introduction|background|methodology|methods|results|discussion|conclusion|references|appendix)$",
            )
            .context("failed to compile keyword heading regex")?,
        })
    }

    pub(super) fn match_heading(&self, line: &str) -> Option<String> {
        if let Some(captures) = self.chapter_heading.captures(line) {
            return Some(format!("{}: {}", &captures[1], &captures[2]));
        }
        if let Some(captures) = self.numbered_heading.captures(line) {
            return Some(format!("{}: {}", &captures[1], &captures[2]));
        }
        if let Some(captures) = self.all_caps_heading.captures(line) {
            return Some(captures[1].to_string());
        }
        if let Some(captures) = self.keyword_heading.captures(line) {
            return Some(captures[1].to_string());
        }

        None
    }
}

/// Scans normalized text line by line, classifying each non-blank line as a
/// heading or body text, and accumulates the section bodies in encounter
/// order. Returns a single "Full Document" section when detection produced a
/// degenerate result, so the caller never gets less than "no segmentation".
pub fn detect_sections(full_text: &str, matchers: &HeadingMatchers) -> SectionMap {
    let lines: Vec<&str> = full_text.split('\n').collect();
    let line_count = lines.len();

    let mut sections = SectionMap::default();
    let mut current_title = "Document Start".to_string();
    sections.append(&current_title, "");

    for (line_index, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut heading = matchers.match_heading(line);
        if heading.is_none() && is_probable_title_line(line, line_index, line_count) {
            heading = Some(line.to_string());
        }

        match heading {
            Some(title) => {
                info!(title = %title, "detected section heading");
                current_title = title;
                let marker = format!("\n\n## {}\n\n", current_title);
                sections.append(&current_title, &marker);
            }
            None => {
                sections.append(&current_title, line);
                sections.append(&current_title, "\n");
            }
        }
    }

    if sections.total_body_chars() < MIN_MEANINGFUL_TEXT_CHARS || sections.len() <= 1 {
        warn!(
            section_count = sections.len(),
            "section detection produced a degenerate result, using single section"
        );
        return SectionMap::single("Full Document", full_text);
    }

    sections
}

/// A short title-case line with text before and after it is likely a heading.
/// Prose that happens to satisfy this is accepted as a false positive.
fn is_probable_title_line(line: &str, line_index: usize, line_count: usize) -> bool {
    char_len(line) < MAX_TITLE_LINE_CHARS
        && is_title_case(line)
        && line_index > 0
        && line_index + 1 < line_count
}

/// str.istitle semantics: uppercase letters only start words, lowercase
/// letters only continue them, and at least one cased character exists.
fn is_title_case(text: &str) -> bool {
    let mut any_cased = false;
    let mut previous_cased = false;

    for character in text.chars() {
        if character.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if character.is_lowercase() {
            if !previous_cased {
                return false;
            }
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }

    any_cased
}

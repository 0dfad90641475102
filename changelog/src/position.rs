use regex::Regex;

/// Index of the first line that opens an already released section
pub fn find_first_release_position(lines: &[&str], release_heading: &Regex) -> Option<usize> {
    lines.iter().position(|line| release_heading.is_match(line))
}

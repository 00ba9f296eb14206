use anyhow::Result;
use serde_json::json;
use woodshop::Section;

/// Render sections as an indented text listing.
pub(crate) fn format_plain(query: &str, sections: &[Section]) -> String {
	let mut out = String::new();
	if sections.is_empty() {
		out.push_str(&format!("No results for '{query}'\n"));
		return out;
	}
	for section in sections {
		out.push_str(&format!("{} ({})\n", section.title, section.items.len()));
		for item in &section.items {
			out.push_str(&format!("  #{} {}  {}\n", item.id, item.rate, item.image_uri));
		}
	}
	out
}

pub(crate) fn print_plain(query: &str, sections: &[Section]) {
	print!("{}", format_plain(query, sections));
}

pub(crate) fn format_sections_json(query: &str, sections: &[Section]) -> Result<String> {
	let payload = json!({
		"query": query,
		"sections": sections,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(query: &str, sections: &[Section]) -> Result<()> {
	println!("{}", format_sections_json(query, sections)?);
	Ok(())
}

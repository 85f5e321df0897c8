//! Rendering of the adjective/animal mapping to a single HTML document.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::AdjectiveMap;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; background: #f5f5f5; margin: 0; padding: 20px; }
        h1 { text-align: center; color: #333; }
        table { border-collapse: collapse; width: 100%; margin-top: 20px; background: white; }
        th, td { border: 1px solid #ccc; padding: 12px; vertical-align: top; }
        th { background-color: #e0e0e0; }
        td.adjective { width: 30%; font-weight: bold; background-color: #fafafa; }
        td.animals { width: 70%; }
        .animal-entry { margin-bottom: 20px; }
        .animal-entry img { max-width: 200px; max-height: 200px; margin-top: 5px; border: 1px solid #ddd; border-radius: 4px; }
        a { text-decoration: none; color: #0645ad; }
        a:hover { text-decoration: underline; }
"#;

/// Render the mapping as a full HTML document.
///
/// One table row per adjective; each animal links to its article page and
/// shows its locally cached image when one was downloaded. The BTreeMap
/// iteration order gives alphabetical rows for free.
pub fn render_html(mapping: &AdjectiveMap) -> String {
    let mut body = String::new();

    for (adjective, animals) in mapping {
        let mut animal_html = String::new();
        for entry in animals {
            let name = escape(&entry.name);
            let page_url = entry.page_url.as_deref().unwrap_or("#");
            let img_html = match &entry.local_image {
                Some(path) => format!(
                    r#"<img src="{}" alt="{}">"#,
                    escape(&path.display().to_string()),
                    name
                ),
                None => String::new(),
            };
            animal_html.push_str(&format!(
                r#"
            <div class="animal-entry">
                <a href="{}" target="_blank">{}</a><br>
                {}
            </div>"#,
                escape(page_url),
                name,
                img_html
            ));
        }

        body.push_str(&format!(
            r#"
        <tr>
            <td class="adjective">{}</td>
            <td class="animals">{}</td>
        </tr>"#,
            escape(adjective),
            animal_html
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Animal Collateral Adjectives</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>Animal Collateral Adjectives</h1>
    <table>
        <thead>
            <tr>
                <th>Collateral Adjective</th>
                <th>Animals</th>
            </tr>
        </thead>
        <tbody>{body}
        </tbody>
    </table>
</body>
</html>
"#
    )
}

/// Render the mapping and write it to `output_path`.
pub fn write_report(mapping: &AdjectiveMap, output_path: &Path) -> std::io::Result<PathBuf> {
    let html = render_html(mapping);
    std::fs::write(output_path, html)?;
    info!(path = %output_path.display(), "report written");
    Ok(output_path.to_path_buf())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

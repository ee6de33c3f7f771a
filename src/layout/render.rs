//! HTML rendering
//!
//! `render_page` produces the complete document served at `/`.
//! `render_fragments` produces the inner HTML of each output for a single
//! update; the page script swaps these into place when the selector changes.

use std::collections::BTreeMap;

use super::element::Element;
use super::ids;
use crate::chart::{render_svg, SvgOptions};
use crate::dashboard::DashboardUpdate;
use crate::format::escape_html;

/// Selector wiring: one request per change, then replace the four outputs
const PAGE_SCRIPT: &str = r#"
(function () {
  var select = document.getElementById("region-dropdown");
  if (!select) { return; }
  select.addEventListener("change", function () {
    var url = "/api/v1/dashboard/render?region=" + encodeURIComponent(select.value);
    fetch(url)
      .then(function (res) { return res.json(); })
      .then(function (body) {
        Object.keys(body.outputs).forEach(function (id) {
          var el = document.getElementById(id);
          if (el) { el.innerHTML = body.outputs[id]; }
        });
      })
      .catch(function (err) { console.error("dashboard update failed", err); });
  });
})();
"#;

/// Render one element (and its subtree) as HTML
pub fn render_element(element: &Element, opts: &SvgOptions, out: &mut String) {
    match element {
        Element::Div {
            id,
            style,
            children,
        } => {
            out.push_str("<div");
            if let Some(id) = id {
                push_attr(out, "id", id);
            }
            if !style.is_empty() {
                push_attr(out, "style", &style.to_css());
            }
            out.push('>');
            for child in children {
                render_element(child, opts, out);
            }
            out.push_str("</div>");
        }
        Element::Heading { level, text, style } => {
            out.push_str(&format!("<h{}", level));
            if !style.is_empty() {
                push_attr(out, "style", &style.to_css());
            }
            out.push('>');
            out.push_str(&escape_html(text));
            out.push_str(&format!("</h{}>", level));
        }
        Element::Label { text, for_id } => {
            out.push_str("<label");
            if let Some(for_id) = for_id {
                push_attr(out, "for", for_id);
            }
            out.push('>');
            out.push_str(&escape_html(text));
            out.push_str("</label>");
        }
        Element::Dropdown {
            id,
            options,
            value,
            clearable,
        } => {
            out.push_str("<select");
            push_attr(out, "id", id);
            push_attr(out, "name", id);
            push_attr(out, "style", "width: 100%; padding: 6px");
            out.push('>');
            if *clearable {
                out.push_str(r#"<option value=""></option>"#);
            }
            for option in options {
                out.push_str("<option");
                push_attr(out, "value", &option.value);
                if option.value == *value {
                    out.push_str(" selected");
                }
                out.push('>');
                out.push_str(&escape_html(&option.label));
                out.push_str("</option>");
            }
            out.push_str("</select>");
        }
        Element::LineBreak => out.push_str("<br>"),
        Element::Graph { id, figure } => {
            out.push_str("<div");
            push_attr(out, "id", id);
            push_attr(out, "class", "graph");
            out.push('>');
            if let Some(figure) = figure {
                out.push_str(&render_svg(figure, opts));
            }
            out.push_str("</div>");
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Render the full HTML document around `root`
pub fn render_page(title: &str, root: &Element, opts: &SvgOptions) -> String {
    let mut body = String::new();
    render_element(root, opts, &mut body);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>body {{ margin: 0; }} .graph {{ margin-top: 20px; }}</style>\n\
         </head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        escape_html(title),
        body,
        PAGE_SCRIPT
    )
}

fn render_children(children: &[Element], opts: &SvgOptions) -> String {
    let mut out = String::new();
    for child in children {
        render_element(child, opts, &mut out);
    }
    out
}

/// Inner HTML of each output, keyed by output id
pub fn render_fragments(update: &DashboardUpdate, opts: &SvgOptions) -> BTreeMap<String, String> {
    let mut fragments = BTreeMap::new();
    fragments.insert(
        ids::SALES_LINE_CHART.to_string(),
        render_svg(&update.sales_chart, opts),
    );
    fragments.insert(
        ids::PROFIT_BAR_CHART.to_string(),
        render_svg(&update.profit_chart, opts),
    );
    fragments.insert(
        ids::TOTAL_SALES.to_string(),
        render_children(&update.total_sales.to_elements(), opts),
    );
    fragments.insert(
        ids::TOTAL_PROFIT.to_string(),
        render_children(&update.total_profit.to_elements(), opts),
    );
    fragments
}

//! Askama templates for the widget's HTML fragments.

use askama::Template;

use crate::domain::{ArrivalRecord, StopCode};

/// Results table: header row followed by one row per arrival.
#[derive(Template)]
#[template(
    source = r#"<tr><th scope="col">Bus</th><th scope="col">Direction</th><th scope="col">Wait (m)</th><th scope="col">ETA</th></tr>
{%- for row in rows %}
<tr><td>{{ row.bus_number }}</td><td>{{ row.destination }}</td><td>{{ row.eta_minutes }}</td><td>{{ row.arrival_timestamp }}</td></tr>
{%- endfor %}"#,
    ext = "html"
)]
pub struct ResultsTableTemplate<'a> {
    pub rows: &'a [ArrivalRecord],
}

/// Links to previously used stop codes.
#[derive(Template)]
#[template(
    source = r##"<ul class="previous-codes">
{%- for code in codes %}
<li><a href="#" data-stopcode="{{ code }}">{{ code }}</a></li>
{%- endfor %}
</ul>"##,
    ext = "html"
)]
pub struct PreviousCodesTemplate<'a> {
    pub codes: &'a [StopCode],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_and_rows() {
        let rows = vec![
            ArrivalRecord::new("728", "Alges", 5, "10:05"),
            ArrivalRecord::new("15", "Cais do Sodre", 12, "10:12"),
        ];
        let html = ResultsTableTemplate { rows: &rows }.render().unwrap();

        assert!(html.starts_with("<tr><th scope=\"col\">Bus</th>"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td>728</td><td>Alges</td><td>5</td><td>10:05</td>"));
    }

    #[test]
    fn table_escapes_cell_text() {
        let rows = vec![ArrivalRecord::new("728", "<b>Alges</b>", 5, "10:05")];
        let html = ResultsTableTemplate { rows: &rows }.render().unwrap();

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;Alges"));
    }

    #[test]
    fn previous_codes_list() {
        let codes = vec![StopCode::parse("1712").unwrap(), StopCode::parse("9999").unwrap()];
        let html = PreviousCodesTemplate { codes: &codes }.render().unwrap();

        assert!(html.contains(r##"<a href="#" data-stopcode="1712">1712</a>"##));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}

use crate::Point;

/// Encodes points into the line protocol accepted by the 1.x `/write`
/// endpoint, one line per point, nanosecond timestamps.
pub fn to_lines(points: &[Point]) -> String {
    points
        .iter()
        .map(to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_line(point: &Point) -> String {
    let mut line = escape_measurement(&point.measurement);

    for (name, value) in &point.tags {
        line.push(',');
        line.push_str(&escape_part(name));
        line.push('=');
        line.push_str(&escape_part(value));
    }

    line.push(' ');

    let mut first = true;
    for (name, value) in &point.fields {
        if !first {
            line.push(',');
        }
        first = false;

        line.push_str(&escape_part(name));
        line.push('=');
        line.push_str(&value.to_string());
    }

    line.push(' ');

    let nanos = point.time.timestamp_nanos_opt().unwrap_or_default();
    line.push_str(&nanos.to_string());

    line
}

fn escape_measurement(value: &str) -> String {
    value.replace(',', "\\,").replace(' ', "\\ ")
}

fn escape_part(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

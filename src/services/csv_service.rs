//! Generación de CSV para exports
//!
//! Escapado mínimo compatible con RFC 4180: comillas dobladas y celdas
//! entrecomilladas cuando contienen coma, comilla o salto de línea.

/// Escapar una celda individual
pub fn csv_escape(value: &str) -> String {
    let needs_quoting = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if !needs_quoting {
        return value.to_string();
    }

    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serializar filas (cabecera incluida) con salto de línea final
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut out = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| csv_escape(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_cell_untouched() {
        assert_eq!(csv_escape("simple"), "simple");
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn test_comma_forces_quotes() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(csv_escape("Shell \"Express\""), "\"Shell \"\"Express\"\"\"");
    }

    #[test]
    fn test_newlines_force_quotes() {
        assert_eq!(csv_escape("linea1\nlinea2"), "\"linea1\nlinea2\"");
    }

    #[test]
    fn test_to_csv_ends_with_newline() {
        let rows = vec![
            vec!["occurredAt".to_string(), "odometer".to_string()],
            vec!["2026-01-01T00:00:00Z".to_string(), "1000".to_string()],
        ];
        let csv = to_csv(&rows);
        assert_eq!(csv, "occurredAt,odometer\n2026-01-01T00:00:00Z,1000\n");
    }
}

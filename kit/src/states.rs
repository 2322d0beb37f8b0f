use serde::Serialize;

/// A Brazilian federative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BrazilianState {
    /// Two-letter code, e.g. "SP".
    pub value: &'static str,
    /// Full name, e.g. "São Paulo".
    pub label: &'static str,
}

const fn state(value: &'static str, label: &'static str) -> BrazilianState {
    BrazilianState { value, label }
}

pub const BRAZILIAN_STATES: [BrazilianState; 27] = [
    state("AC", "Acre"),
    state("AL", "Alagoas"),
    state("AP", "Amapá"),
    state("AM", "Amazonas"),
    state("BA", "Bahia"),
    state("CE", "Ceará"),
    state("DF", "Distrito Federal"),
    state("ES", "Espírito Santo"),
    state("GO", "Goiás"),
    state("MA", "Maranhão"),
    state("MT", "Mato Grosso"),
    state("MS", "Mato Grosso do Sul"),
    state("MG", "Minas Gerais"),
    state("PA", "Pará"),
    state("PB", "Paraíba"),
    state("PR", "Paraná"),
    state("PE", "Pernambuco"),
    state("PI", "Piauí"),
    state("RJ", "Rio de Janeiro"),
    state("RN", "Rio Grande do Norte"),
    state("RS", "Rio Grande do Sul"),
    state("RO", "Rondônia"),
    state("RR", "Roraima"),
    state("SC", "Santa Catarina"),
    state("SP", "São Paulo"),
    state("SE", "Sergipe"),
    state("TO", "Tocantins"),
];

/// Looks a state up by its two-letter code, ignoring case and surrounding spaces.
pub fn find_state(code: &str) -> Option<BrazilianState> {
    let code = code.trim();
    BRAZILIAN_STATES
        .iter()
        .find(|s| s.value.eq_ignore_ascii_case(code))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_state() {
        assert_eq!(find_state("SP").map(|s| s.label), Some("São Paulo"));
        assert_eq!(find_state(" rj ").map(|s| s.label), Some("Rio de Janeiro"));
        assert!(find_state("XX").is_none());
        assert!(find_state("").is_none());
    }

    #[test]
    fn test_state_codes_are_unique() {
        let codes = crate::arrays::unique(&BRAZILIAN_STATES.map(|s| s.value));
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn test_state_serializes_as_value_label() {
        let json = serde_json::to_value(find_state("PE").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "PE", "label": "Pernambuco" }));
    }
}

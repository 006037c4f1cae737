/// Fixed set of places where a maintenance job can take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Delegacion,
    Farmacia,
    Optica,
    Otro,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Delegacion,
        Location::Farmacia,
        Location::Optica,
        Location::Otro,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Location::Delegacion => "delegacion",
            Location::Farmacia => "farmacia",
            Location::Optica => "optica",
            Location::Otro => "otro",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "delegacion" => Some(Location::Delegacion),
            "farmacia" => Some(Location::Farmacia),
            "optica" => Some(Location::Optica),
            "otro" => Some(Location::Otro),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (accepts accents and any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "delegacion" | "delegación" => Some(Location::Delegacion),
            "farmacia" => Some(Location::Farmacia),
            "optica" | "óptica" => Some(Location::Optica),
            "otro" => Some(Location::Otro),
            _ => None,
        }
    }

    /// Display label shown in listings and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Delegacion => "Delegación",
            Location::Farmacia => "Farmacia",
            Location::Optica => "Óptica",
            Location::Otro => "Otro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_round_trip() {
        for loc in Location::ALL {
            assert_eq!(Location::from_db_str(loc.to_db_str()), Some(loc));
        }
    }

    #[test]
    fn from_code_accepts_accented_input() {
        assert_eq!(Location::from_code("Óptica"), Some(Location::Optica));
        assert_eq!(Location::from_code("DELEGACION"), Some(Location::Delegacion));
        assert_eq!(Location::from_code("vivero"), None);
    }
}

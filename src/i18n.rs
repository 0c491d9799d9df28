//! Front panel translations.
//!
//! The locale is navigation state owned by the
//! [`PageController`](crate::pages::PageController), not a process global.
//! Every string is looked up through the closed [`Text`] key enum, so a missing
//! translation is a compile error rather than a runtime fallback.
//!
//! Strings use Latin-1 characters only (É, Ö, µ, °), matching the
//! `iso_8859_1` mono fonts used by the renderer.

use core::fmt;
use core::str::FromStr;

use crate::error::DashboardError;

// =============================================================================
// Locale
// =============================================================================

/// Supported front panel languages, in cycling order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Locale {
    /// Français (factory default).
    #[default]
    Fr,
    /// English.
    En,
    /// Español.
    Es,
    /// Deutsch.
    De,
}

impl Locale {
    /// All locales in cycling order.
    pub const ALL: [Self; 4] = [Self::Fr, Self::En, Self::Es, Self::De];

    /// Next locale in the cycle (wraps after German).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Es,
            Self::Es => Self::De,
            Self::De => Self::Fr,
        }
    }

    /// Native language name shown on the CONFIG page.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
            Self::Es => "Español",
            Self::De => "Deutsch",
        }
    }

    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownLocale(s.to_string()))
    }
}

// =============================================================================
// Translation Keys
// =============================================================================

/// Translatable front panel string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Text {
    PageListen,
    PageDetails,
    PageHealth,
    PageSession,
    PageConfig,
    RailA,
    RailB,
    Voltage,
    Current,
    Power,
    Temperature,
    Headroom,
    Ripple,
    Noise,
    Efficiency,
    Ok,
    Warning,
    Active,
    System,
    Protections,
    Ovp,
    Ocp,
    Otp,
    OcpLimit,
    Uptime,
    Energy,
    SessionStart,
    Events,
    Language,
    Brightness,
    Simulation,
    Setpoint,
    SimNormal,
    SimHot,
    SimRipple,
    SimLoad,
    SimLowV,
    SimHighV,
    BootSubtitle,
    BootLoading,
    BootPrompt,
}

impl Text {
    /// Translation row in [`Locale::ALL`] order: FR, EN, ES, DE.
    const fn row(self) -> [&'static str; 4] {
        match self {
            Self::PageListen => ["ÉCOUTE", "LISTEN", "ESCUCHA", "HÖREN"],
            Self::PageDetails => ["DÉTAILS", "DETAILS", "DETALLES", "DETAILS"],
            Self::PageHealth => ["SANTÉ", "HEALTH", "SALUD", "STATUS"],
            Self::PageSession => ["SESSION", "SESSION", "SESIÓN", "SITZUNG"],
            Self::PageConfig => ["CONFIG", "CONFIG", "CONFIG", "CONFIG"],
            Self::RailA => ["RAIL A", "RAIL A", "RAIL A", "KANAL A"],
            Self::RailB => ["RAIL B", "RAIL B", "RAIL B", "KANAL B"],
            Self::Voltage => ["TENSION", "VOLTAGE", "VOLTAJE", "SPANNUNG"],
            Self::Current => ["COURANT", "CURRENT", "CORRIENTE", "STROM"],
            Self::Power => ["PUISSANCE", "POWER", "POTENCIA", "LEISTUNG"],
            Self::Temperature => ["TEMPÉRATURE", "TEMPERATURE", "TEMPERATURA", "TEMPERATUR"],
            Self::Headroom => ["RÉSERVE", "HEADROOM", "RESERVA", "RESERVE"],
            Self::Ripple => ["ONDULATION", "RIPPLE", "RIZADO", "WELLIGKEIT"],
            Self::Noise => ["BRUIT", "NOISE", "RUIDO", "RAUSCHEN"],
            Self::Efficiency => ["RENDEMENT", "EFFICIENCY", "EFICIENCIA", "EFFIZIENZ"],
            Self::Ok => ["OK", "OK", "OK", "OK"],
            Self::Warning => ["ATTENTION", "WARNING", "ALERTA", "WARNUNG"],
            Self::Active => ["ACTIF", "ACTIVE", "ACTIVO", "AKTIV"],
            Self::System => ["SYSTÈME", "SYSTEM", "SISTEMA", "SYSTEM"],
            Self::Protections => ["PROTECTIONS", "PROTECTIONS", "PROTECCIONES", "SCHUTZ"],
            Self::Ovp => ["SURTENSION", "OVERVOLTAGE", "SOBRETENSIÓN", "ÜBERSPANNUNG"],
            Self::Ocp => ["SURINTENSITÉ", "OVERCURRENT", "SOBRECORRIENTE", "ÜBERSTROM"],
            Self::Otp => ["SURCHAUFFE", "OVERTEMP", "SOBRETEMPERATURA", "ÜBERTEMPERATUR"],
            Self::OcpLimit => ["LIMITE OCP", "OCP LIMIT", "LÍMITE OCP", "OCP-GRENZE"],
            Self::Uptime => ["DURÉE", "UPTIME", "TIEMPO", "LAUFZEIT"],
            Self::Energy => ["ÉNERGIE", "ENERGY", "ENERGÍA", "ENERGIE"],
            Self::SessionStart => ["DÉBUT SESSION", "SESSION START", "INICIO SESIÓN", "SITZUNGSSTART"],
            Self::Events => ["ÉVÉNEMENTS", "EVENTS", "EVENTOS", "EREIGNISSE"],
            Self::Language => ["LANGUE", "LANGUAGE", "IDIOMA", "SPRACHE"],
            Self::Brightness => ["LUMINOSITÉ", "BRIGHTNESS", "BRILLO", "HELLIGKEIT"],
            Self::Simulation => ["SIMULATION", "SIMULATION", "SIMULACIÓN", "SIMULATION"],
            Self::Setpoint => ["CONSIGNE", "SETPOINT", "CONSIGNA", "SOLLWERT"],
            Self::SimNormal => ["NORM", "NORM", "NORM", "NORM"],
            Self::SimHot => ["HOT", "HOT", "HOT", "HEISS"],
            Self::SimRipple => ["RIP", "RIP", "RIP", "RIP"],
            Self::SimLoad => ["LOAD", "LOAD", "CARGA", "LAST"],
            Self::SimLowV => ["LO-V", "LO-V", "LO-V", "LO-V"],
            Self::SimHighV => ["HI-V", "HI-V", "HI-V", "HI-V"],
            Self::BootSubtitle => [
                "Alimentation Linéaire Audiophile",
                "Audiophile Linear Power Supply",
                "Fuente Lineal Audiófila",
                "Audiophiles Linearnetzteil",
            ],
            Self::BootLoading => ["Initialisation", "Initializing", "Inicializando", "Initialisierung"],
            Self::BootPrompt => [
                "Appuyez sur ENTER pour démarrer",
                "Press ENTER to start",
                "Pulse ENTER para empezar",
                "ENTER drücken zum Starten",
            ],
        }
    }

    /// Translated string for `locale`.
    #[inline]
    pub const fn get(
        self,
        locale: Locale,
    ) -> &'static str {
        self.row()[locale as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
    }

    #[test]
    fn test_locale_cycle() {
        let mut locale = Locale::Fr;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(locale);
            locale = locale.next();
        }
        assert_eq!(seen, Locale::ALL);
        assert_eq!(locale, Locale::Fr, "cycle wraps after four steps");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("de".parse::<Locale>().ok(), Some(Locale::De));
        assert_eq!(" EN ".parse::<Locale>().ok(), Some(Locale::En));
        assert!(matches!("it".parse::<Locale>(), Err(DashboardError::UnknownLocale(_))));
    }

    #[test]
    fn test_lookup_per_locale() {
        assert_eq!(Text::PageListen.get(Locale::Fr), "ÉCOUTE");
        assert_eq!(Text::PageListen.get(Locale::En), "LISTEN");
        assert_eq!(Text::PageListen.get(Locale::Es), "ESCUCHA");
        assert_eq!(Text::PageListen.get(Locale::De), "HÖREN");
        assert_eq!(Text::RailA.get(Locale::De), "KANAL A");
    }

    #[test]
    fn test_strings_fit_latin1() {
        let keys = [
            Text::PageListen,
            Text::Temperature,
            Text::Ovp,
            Text::Otp,
            Text::SessionStart,
            Text::Events,
            Text::BootSubtitle,
            Text::BootPrompt,
        ];
        for key in keys {
            for locale in Locale::ALL {
                let s = key.get(locale);
                assert!(s.chars().all(|c| (c as u32) < 0x100), "{s:?} is Latin-1");
            }
        }
    }
}

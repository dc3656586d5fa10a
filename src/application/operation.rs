use std::fmt;

/// The remote procedures exposed by the Correos de Costa Rica service.
///
/// Each variant maps to exactly one SOAP operation; dispatch goes
/// through this enum rather than through operation-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CcrMethod {
    /// Province lookup
    CodProvincia,
    /// Cantons of a province
    CodCanton,
    /// Districts of a canton
    CodDistrito,
    /// Neighborhoods of a district
    CodBarrio,
    /// Postal code of a district
    CodPostal,
    /// Shipping rate quote
    Tarifa,
    /// Waybill (guide) number generation
    GenerarGuia,
    /// Shipment registration
    RegistroEnvio,
    /// Shipment tracking
    MovilTracking,
}

impl CcrMethod {
    /// Operation name as it appears on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CcrMethod::CodProvincia => "ccrCodProvincia",
            CcrMethod::CodCanton => "ccrCodCanton",
            CcrMethod::CodDistrito => "ccrCodDistrito",
            CcrMethod::CodBarrio => "ccrCodBarrio",
            CcrMethod::CodPostal => "ccrCodPostal",
            CcrMethod::Tarifa => "ccrTarifa",
            CcrMethod::GenerarGuia => "ccrGenerarGuia",
            CcrMethod::RegistroEnvio => "ccrRegistroEnvio",
            CcrMethod::MovilTracking => "ccrMovilTracking",
        }
    }

    /// Name of the element wrapping the operation's response
    #[must_use]
    pub fn response_element(&self) -> String {
        format!("{}Response", self.as_str())
    }

    /// Name of the result field inside the response element
    #[must_use]
    pub fn result_field(&self) -> String {
        format!("{}Result", self.as_str())
    }
}

impl fmt::Display for CcrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

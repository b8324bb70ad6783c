//! The report catalog: stable identifier → parameterless aggregate SQL.
//!
//! The catalog is the definition of what each report means. Adding a
//! report is adding an entry to [`STANDARD_REPORTS`]; nothing else changes.

use rustc_hash::FxHashMap;

use crate::errors::ReportError;

/// One named report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDef {
    pub id: &'static str,
    pub sql: &'static str,
}

impl ReportDef {
    pub const fn new(id: &'static str, sql: &'static str) -> Self {
        Self { id, sql }
    }

    /// Human-readable heading: the id with underscores as spaces.
    pub fn title(&self) -> String {
        self.id.replace('_', " ")
    }
}

pub const STANDARD_REPORTS: &[ReportDef] = &[
    ReportDef::new(
        "Citywise_Providers",
        "SELECT City, COUNT(*) AS Providers_Count FROM Providers GROUP BY City ORDER BY City",
    ),
    ReportDef::new(
        "Citywise_Receivers",
        "SELECT City, COUNT(*) AS Receivers_Count FROM Receivers GROUP BY City ORDER BY City",
    ),
    ReportDef::new(
        "Provider_Type_Most_Food",
        "SELECT Provider_Type, SUM(Quantity) AS Total_Quantity FROM Food_Listings \
         GROUP BY Provider_Type ORDER BY Total_Quantity DESC, Provider_Type",
    ),
    ReportDef::new(
        "Provider_Contacts",
        "SELECT City, Name, Contact, Type AS Provider_Type FROM Providers ORDER BY City, Name",
    ),
    ReportDef::new(
        "Top_Receivers_By_Claims",
        "SELECT r.Name, r.Type, COUNT(c.Claim_ID) AS Total_Claims FROM Receivers r \
         LEFT JOIN Claims c ON r.Receiver_ID = c.Receiver_ID \
         GROUP BY r.Name, r.Type ORDER BY Total_Claims DESC, r.Name",
    ),
    ReportDef::new(
        "Total_Quantity_Available",
        "SELECT SUM(Quantity) AS Total_Quantity FROM Food_Listings",
    ),
    ReportDef::new(
        "City_With_Most_Listings",
        "SELECT Location AS City, COUNT(*) AS Listings_Count FROM Food_Listings \
         GROUP BY Location ORDER BY Listings_Count DESC, City",
    ),
    ReportDef::new(
        "Common_Food_Types",
        "SELECT Food_Type, COUNT(*) AS Items_Count FROM Food_Listings \
         GROUP BY Food_Type ORDER BY Items_Count DESC, Food_Type",
    ),
    ReportDef::new(
        "Claims_Per_Food_Item",
        "SELECT Food_ID, COUNT(*) AS Claims_Count FROM Claims \
         GROUP BY Food_ID ORDER BY Claims_Count DESC, Food_ID",
    ),
    ReportDef::new(
        "Provider_Most_Completed_Claims",
        "SELECT p.Name, COUNT(*) AS Completed_Claims FROM Claims c \
         JOIN Food_Listings f ON c.Food_ID = f.Food_ID \
         JOIN Providers p ON f.Provider_ID = p.Provider_ID \
         WHERE c.Status = 'Completed' \
         GROUP BY p.Name ORDER BY Completed_Claims DESC, p.Name",
    ),
    ReportDef::new(
        "Claim_Status_Percentage",
        "SELECT Status, COUNT(*) AS Count, \
         ROUND(100.0 * COUNT(*) / (SELECT COUNT(*) FROM Claims), 2) AS Percentage \
         FROM Claims GROUP BY Status ORDER BY Percentage DESC, Status",
    ),
    ReportDef::new(
        "Avg_Qty_Per_Receiver",
        "SELECT r.Name, ROUND(AVG(f.Quantity), 2) AS Avg_Quantity FROM Claims c \
         JOIN Receivers r ON c.Receiver_ID = r.Receiver_ID \
         JOIN Food_Listings f ON c.Food_ID = f.Food_ID \
         GROUP BY r.Name ORDER BY Avg_Quantity DESC, r.Name",
    ),
    ReportDef::new(
        "Most_Claimed_Meal_Type",
        "SELECT f.Meal_Type, COUNT(*) AS Claims_Count FROM Claims c \
         JOIN Food_Listings f ON c.Food_ID = f.Food_ID \
         GROUP BY f.Meal_Type ORDER BY Claims_Count DESC, f.Meal_Type",
    ),
    ReportDef::new(
        "Total_Qty_By_Provider",
        "SELECT p.Name, COALESCE(SUM(f.Quantity), 0) AS Total_Quantity FROM Providers p \
         LEFT JOIN Food_Listings f ON p.Provider_ID = f.Provider_ID \
         GROUP BY p.Name ORDER BY Total_Quantity DESC, p.Name",
    ),
    ReportDef::new(
        "Top_Cities_Completed_Claims",
        "SELECT f.Location AS City, COUNT(*) AS Completed_Claims FROM Claims c \
         JOIN Food_Listings f ON c.Food_ID = f.Food_ID \
         WHERE c.Status = 'Completed' \
         GROUP BY f.Location ORDER BY Completed_Claims DESC, City",
    ),
];

/// An ordered, id-indexed set of reports.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ReportDef>,
    index: FxHashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog. A repeated id replaces the earlier entry in place.
    pub fn new(reports: impl IntoIterator<Item = ReportDef>) -> Self {
        let mut entries: Vec<ReportDef> = Vec::new();
        let mut index = FxHashMap::default();
        for report in reports {
            match index.get(report.id) {
                Some(&i) => entries[i] = report,
                None => {
                    index.insert(report.id, entries.len());
                    entries.push(report);
                }
            }
        }
        Self { entries, index }
    }

    /// The fifteen standard reports.
    pub fn standard() -> Self {
        Self::new(STANDARD_REPORTS.iter().copied())
    }

    pub fn get(&self, id: &str) -> Option<&ReportDef> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn resolve(&self, id: &str) -> Result<&ReportDef, ReportError> {
        self.get(id)
            .ok_or_else(|| ReportError::UnknownReport(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportDef> + '_ {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

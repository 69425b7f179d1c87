//! Plain-text production report of an aircraft.
//!
//! The report has a short header followed by four sections: general information,
//! tasks, parts, and test history. Enum values are printed with their stored names so
//! the report reads the same as the API responses.

use std::fmt::Write;

use chrono::NaiveDateTime;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::{part::PartDto, task::TaskDto, test_record::TestRecordDto},
    server::{
        error::Error,
        model::db::AircraftModel,
        service::{
            aircraft::AircraftService, part::PartService, task::TaskService,
            test_record::TestRecordService,
        },
        util::time,
    },
};

const SEPARATOR_WIDTH: usize = 60;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the report of an aircraft as of now.
    ///
    /// # Returns
    /// - `Ok(String)` - Report text
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    pub async fn generate(&self, aircraft_id: &str) -> Result<String, Error> {
        let aircraft = AircraftService::new(self.db).get_existing(aircraft_id).await?;
        let tasks = TaskService::new(self.db).get_by_aircraft(aircraft_id).await?;
        let parts = PartService::new(self.db).get_by_aircraft(aircraft_id).await?;
        let tests = TestRecordService::new(self.db)
            .get_by_aircraft(aircraft_id)
            .await?;

        tracing::debug!(aircraft_id = %aircraft_id, "Generating production report");

        Ok(render_report(&aircraft, &tasks, &parts, &tests, time::now()))
    }
}

/// Render the report text from already loaded records.
pub fn render_report(
    aircraft: &AircraftModel,
    tasks: &[TaskDto],
    parts: &[PartDto],
    tests: &[TestRecordDto],
    generated_at: NaiveDateTime,
) -> String {
    let general = [
        format!("Project ID:       {}", aircraft.id),
        format!("Model:            {}", aircraft.model),
        format!("Type:             {}", aircraft.aircraft_type),
        format!("Current status:   {}", aircraft.status.to_value()),
        format!(
            "Client:           {}",
            aircraft.client_name.as_deref().unwrap_or("N/A")
        ),
        format!(
            "Delivery date:    {}",
            aircraft
                .delivery_deadline
                .map(|date| date.to_string())
                .unwrap_or_else(|| "Not set".to_string())
        ),
        format!("Capacity:         {} passengers", aircraft.capacity),
        format!("Range:            {} km", aircraft.range),
    ]
    .join("\n");

    let tasks = list_or(tasks, "No tasks recorded.", |task| {
        format!(
            "  - [{:<12}] #{}: {} (Resp: {}, Due: {})",
            task.status.to_value(),
            task.id,
            task.description,
            task.responsible_user_names.join(", "),
            task.due_date
        )
    });

    let parts = list_or(parts, "No parts recorded.", |part| {
        format!(
            "  - [{:<15}] ID #{}: {} (Supplier: {}, Type: {})",
            part.status.to_value(),
            part.id,
            part.name,
            part.supplier,
            part.part_type.to_value()
        )
    });

    let tests = list_or(tests, "No tests recorded.", |test| {
        let mut line = format!(
            "  - [{:<9}] {}: {} test.",
            test.result.to_value(),
            test.date_performed,
            test.test_type.to_value()
        );
        if let Some(notes) = &test.notes {
            let _ = write!(line, " Notes: {}", notes);
        }
        line
    });

    let mut report = format!(
        "AEROCODE - Production Report\nGenerated at: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let sections = [
        section("General aircraft information", &general),
        section("Production steps / tasks", &tasks),
        section("Parts and components", &parts),
        section("Test history", &tests),
    ];
    report.push_str(&sections.join("\n"));

    report
}

fn section(title: &str, content: &str) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    format!(
        "\n{}\n{}\n{}\n{}",
        separator,
        title.to_uppercase(),
        separator,
        content
    )
}

fn list_or<T>(items: &[T], empty: &str, line: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }

    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

use crate::models::StaffAvailability;
use crate::state::{Panel, PanelLine, Tone};

pub const STAFF_AVAILABILITY_TITLE: &str = "👥 Staff Availability";

pub fn staff_availability(availability: &StaffAvailability) -> Panel {
    let mut panel = Panel::new(STAFF_AVAILABILITY_TITLE)
        .line(PanelLine::new(
            Tone::Accent,
            format!("{} total employees", availability.total),
        ))
        .line(PanelLine::new(
            Tone::Accent,
            format!("{} available employees", availability.available),
        ));

    panel.push(if availability.sufficient {
        PanelLine::new(Tone::Success, "✓ Team available to take orders")
    } else {
        PanelLine::new(
            Tone::Warning,
            "⚠ Team understaffed - consider calling in more employees",
        )
    });

    panel.push(PanelLine::blank());
    panel.push(PanelLine::plain("Active employees:"));
    if availability.active.is_empty() {
        panel.push(PanelLine::muted("  (none)"));
    }
    for employee in &availability.active {
        panel.push(PanelLine::plain(format!(
            "  {} - {}",
            employee.name, employee.email
        )));
    }
    panel
}

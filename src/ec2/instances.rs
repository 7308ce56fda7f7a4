use aws_sdk_ec2::types::Reservation;

use crate::models::InstanceSummary;

/// Flatten the two-level reservations/instances nesting into a single list.
/// Reservation order and per-reservation instance order are preserved; an
/// empty reservation contributes no rows. Absent fields become empty strings
/// and are left for the views to dash out.
pub fn flatten_reservations(reservations: &[Reservation]) -> Vec<InstanceSummary> {
    let mut summaries = Vec::new();
    for reservation in reservations {
        for instance in reservation.instances() {
            summaries.push(InstanceSummary {
                id: instance.instance_id().unwrap_or_default().to_string(),
                instance_type: instance
                    .instance_type()
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
                image_id: instance.image_id().unwrap_or_default().to_string(),
            });
        }
    }
    summaries
}

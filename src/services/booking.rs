use crate::models::BookingRequest;

/// Stand-in for a scheduling integration: always succeeds and touches nothing.
pub fn book(hospital_id: &str, user_id: &str, time_slot: &str) -> String {
    tracing::info!(hospital_id, user_id, time_slot, "booking appointment (stub)");
    format!("Appointment booked successfully for hospital ID {hospital_id} at {time_slot}.")
}

pub fn book_request(request: &BookingRequest) -> String {
    book(&request.hospital_id, &request.user_id, &request.time_slot)
}

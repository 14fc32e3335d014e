use super::*;
use crate::state::bookings::{Booking, BookingStatus};

#[test]
fn data_envelope_unwraps_booking_list() {
    let envelope: DataEnvelope<Vec<Booking>> = serde_json::from_value(serde_json::json!({
        "data": [
            { "id": 1, "startTime": "2026-03-01T09:00:00", "status": "Pending", "user": { "fullname": "A" } },
            { "id": 2, "startTime": "2026-03-02T09:00:00", "status": "Accepted", "user": { "fullname": "B" } }
        ],
        "message": "ok"
    }))
    .unwrap();
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[1].status, BookingStatus::Accepted);
}

#[test]
fn login_response_accepts_user_info_alias() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt",
        "userInfo": { "id": 3, "username": "mentor1", "roleName": "Mentor" }
    }))
    .unwrap();
    assert_eq!(resp.token, "jwt");
    assert_eq!(resp.user.id.as_deref(), Some("3"));
    assert_eq!(resp.user.role_name.as_deref(), Some("Mentor"));
}

#[test]
fn login_response_without_profile_defaults_it() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({ "token": "jwt" })).unwrap();
    assert_eq!(resp.user, UserInfo::default());
}

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest {
        username: "u".to_owned(),
        password: "p".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        serde_json::json!({ "username": "u", "password": "p" })
    );
}

use std::path::PathBuf;

use chrono::NaiveDate;

use huddle::config::default_rooms;
use huddle::engine::{Engine, EngineError, ListFilter};
use huddle::grid::GridConfig;
use huddle::model::{BookingDraft, BookingPatch, MeetingType, TimeOfDay};
use huddle::wire::{status_code, DeleteResponse, ErrorBody, ListQuery};

// ── Test infrastructure ──────────────────────────────────────

fn data_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("huddle_int_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn draft_json(json: &str) -> BookingDraft {
    serde_json::from_str(json).unwrap()
}

// ── Tests ────────────────────────────────────────────────────

#[tokio::test]
async fn full_booking_lifecycle() {
    let engine = Engine::new(data_file("lifecycle.json"), default_rooms());

    // Create from a client-shaped JSON body
    let draft = draft_json(
        r#"{
            "roomId": 2,
            "date": "2024-06-03",
            "startTime": "09:00",
            "endTime": "10:30",
            "meetingType": "External",
            "jobName": "Client pitch",
            "booker": "Maya",
            "peopleCount": "4"
        }"#,
    );
    let booking = engine.create_booking(draft).await.unwrap();
    assert_eq!(booking.id, 1);
    assert_eq!(booking.room_name, "Border Collie");
    assert_eq!(booking.meeting_type, MeetingType::External);
    assert_eq!(booking.people_count, Some(4));

    // Reschedule through a partial patch
    let patch: BookingPatch =
        serde_json::from_str(r#"{"startTime":"14:00","endTime":"15:30"}"#).unwrap();
    let moved = engine.update_booking(booking.id, patch).await.unwrap();
    assert_eq!(moved.start_time, t("14:00"));
    assert_eq!(moved.job_name, "Client pitch");

    // Delete and confirm the list is empty again
    engine.delete_booking(booking.id).await.unwrap();
    assert!(engine.list_bookings(ListFilter::All).await.unwrap().is_empty());
    assert_eq!(
        serde_json::to_string(&DeleteResponse::ok()).unwrap(),
        r#"{"success":true}"#
    );
}

#[tokio::test]
async fn conflict_maps_to_wire_response() {
    let engine = Engine::new(data_file("wire_conflict.json"), default_rooms());

    let draft = draft_json(
        r#"{"roomId":1,"date":"2024-06-03","startTime":"09:00","endTime":"10:00",
           "meetingType":"Internal","jobName":"Standup"}"#,
    );
    engine.create_booking(draft).await.unwrap();

    let rival = draft_json(
        r#"{"roomId":1,"date":"2024-06-03","startTime":"09:30","endTime":"11:00",
           "meetingType":"Internal","jobName":"Retro"}"#,
    );
    let err = engine.create_booking(rival).await.unwrap_err();

    assert_eq!(status_code(&err), 409);
    assert_eq!(
        serde_json::to_string(&ErrorBody::from(&err)).unwrap(),
        r#"{"error":"This room is already booked from 09:00 to 10:00."}"#
    );
}

#[tokio::test]
async fn validation_and_not_found_status_codes() {
    let engine = Engine::new(data_file("wire_status.json"), default_rooms());

    let incomplete = draft_json(r#"{"roomId":1,"date":"2024-06-03"}"#);
    let err = engine.create_booking(incomplete).await.unwrap_err();
    assert_eq!(status_code(&err), 400);
    assert_eq!(
        serde_json::to_string(&ErrorBody::from(&err)).unwrap(),
        r#"{"error":"Missing required fields."}"#
    );

    let err = engine.delete_booking(42).await.unwrap_err();
    assert_eq!(status_code(&err), 404);
    assert_eq!(err, EngineError::NotFound(42));
}

#[tokio::test]
async fn list_query_params_drive_the_filter() {
    let engine = Engine::new(data_file("wire_list.json"), default_rooms());

    for (room, day) in [(1, "2024-06-03"), (2, "2024-06-05"), (3, "2024-06-12")] {
        let draft = draft_json(&format!(
            r#"{{"roomId":{room},"date":"{day}","startTime":"09:00","endTime":"10:00",
                "meetingType":"Internal","jobName":"Sync"}}"#,
        ));
        engine.create_booking(draft).await.unwrap();
    }

    let q: ListQuery = serde_json::from_str(r#"{"date":"2024-06-05"}"#).unwrap();
    let day = engine.list_bookings(q.filter()).await.unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].room_id, 2);

    let q: ListQuery =
        serde_json::from_str(r#"{"startDate":"2024-06-03","endDate":"2024-06-09"}"#).unwrap();
    let week = engine.list_bookings(q.filter()).await.unwrap();
    assert_eq!(week.len(), 2);

    let q: ListQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(engine.list_bookings(q.filter()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn drag_drop_reschedule_through_grid() {
    let engine = Engine::new(data_file("drag_drop.json"), default_rooms());
    let grid = GridConfig::default();

    let draft = draft_json(
        r#"{"roomId":1,"date":"2024-06-03","startTime":"09:00","endTime":"10:30",
           "meetingType":"Internal","jobName":"Workshop"}"#,
    );
    let booking = engine.create_booking(draft).await.unwrap();

    // Client drops the card at the pixel height of 13:22 on the next day
    let y = grid.offset_to_pixel_top(13 * 60 + 22);
    let planned = grid.plan_move(booking.span(), y);
    let patch = BookingPatch::move_to(
        date("2024-06-04"),
        TimeOfDay::from_minutes(planned.start),
        TimeOfDay::from_minutes(planned.end),
    );

    let moved = engine.update_booking(booking.id, patch).await.unwrap();
    assert_eq!(moved.date, date("2024-06-04"));
    assert_eq!(moved.start_time, t("13:15"));
    assert_eq!(moved.end_time, t("14:45"));
}

#[tokio::test]
async fn snapshot_file_round_trips_between_processes() {
    let path = data_file("handoff.json");

    {
        let engine = Engine::new(&path, default_rooms());
        let draft = draft_json(
            r#"{"roomId":5,"date":"2024-06-03","startTime":"16:00","endTime":"17:00",
               "meetingType":"Internal","jobName":"1:1","booker":"Kim"}"#,
        );
        engine.create_booking(draft).await.unwrap();
    }

    // The file on disk is the client-facing JSON shape
    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["lastId"], 1);
    assert_eq!(value["bookings"][0]["roomName"], "Poodle");
    assert_eq!(value["bookings"][0]["startTime"], "16:00");

    // A fresh engine picks up where the old one stopped
    let engine = Engine::new(&path, default_rooms());
    let all = engine.list_bookings(ListFilter::All).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].booker, "Kim");
}

//! Golden tests for rendered listings and export links.
//!
//! These tests use insta inline snapshots to pin the exact text handed to
//! users and external calendar applications.

use chrono::NaiveDate;

use crate::calendar::MonthGrid;
use crate::directory::EventDirectory;
use crate::event::{Event, EventType};
use crate::export::google_calendar_url;
use crate::format::{format_event_details, format_event_line, format_month};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The reference "today" for all golden tests.
fn today() -> NaiveDate {
    date(2025, 6, 1)
}

fn tour() -> Event {
    Event::new(
        "vox-pop-tour",
        "Tour: Vox Pop Uli, Peachtree Corners",
        EventType::Civitan,
        date(2025, 6, 5),
    )
    .with_time("11:45 AM")
    .with_location("5700 Spalding Dr, Peachtree Corners, GA")
    .with_description("Guided tour followed by lunch.")
    .with_google_maps_url("https://maps.google.com/?q=Vox+Pop+Uli")
}

fn fair() -> Event {
    Event::new("fair", "County Fair Booth", EventType::Civitan, date(2025, 8, 6))
        .with_end_date(date(2025, 8, 9))
        .with_location("Fairgrounds")
}

fn independence_day() -> Event {
    Event::new(
        "no-meeting-jul",
        "No Meeting - Independence Day",
        EventType::National,
        date(2025, 7, 3),
    )
    .with_no_meeting(Some(date(2025, 7, 10)))
}

fn friendship_day() -> Event {
    Event::new(
        "friendship-day",
        "International Friendship Day",
        EventType::International,
        date(2025, 8, 3),
    )
}

fn directory() -> EventDirectory {
    EventDirectory::new(vec![tour(), fair(), independence_day(), friendship_day()]).unwrap()
}

// =============================================================================
// Export links
// =============================================================================

#[test]
fn golden_google_calendar_url() {
    insta::assert_snapshot!(
        google_calendar_url(&tour()),
        @"https://calendar.google.com/calendar/render?action=TEMPLATE&text=Tour%3A%20Vox%20Pop%20Uli%2C%20Peachtree%20Corners&dates=20250605T000000/20250605T235900&details=Guided%20tour%20followed%20by%20lunch.&location=5700%20Spalding%20Dr%2C%20Peachtree%20Corners%2C%20GA"
    );
}

#[test]
fn golden_google_calendar_url_multi_day() {
    insta::assert_snapshot!(
        google_calendar_url(&fair()),
        @"https://calendar.google.com/calendar/render?action=TEMPLATE&text=County%20Fair%20Booth&dates=20250806T000000/20250809T235900&location=Fairgrounds"
    );
}

// =============================================================================
// Text listings
// =============================================================================

#[test]
fn golden_event_details() {
    insta::assert_snapshot!(format_event_details(&tour()), @r"
    Tour: Vox Pop Uli, Peachtree Corners
    When: June 5, 2025 at 11:45 AM
    Where: 5700 Spalding Dr, Peachtree Corners, GA
    Type: Civitan
    About: Guided tour followed by lunch.
    Map: https://maps.google.com/?q=Vox+Pop+Uli
    ");
}

#[test]
fn golden_cancellation_details() {
    insta::assert_snapshot!(format_event_details(&independence_day()), @r"
    No Meeting - Independence Day
    When: July 3, 2025
    Type: National
    Status: No meeting. Next meeting: July 10, 2025.
    ");
}

#[test]
fn golden_upcoming_listing() {
    let directory = directory();
    let listing: Vec<String> = directory
        .upcoming_events(today())
        .into_iter()
        .map(format_event_line)
        .collect();

    insta::assert_snapshot!(listing.join("\n"), @r"
    June 5, 2025 at 11:45 AM [civitan] Tour: Vox Pop Uli, Peachtree Corners
    July 3, 2025 [national] No Meeting - Independence Day (no meeting)
    August 3, 2025 [international] International Friendship Day
    August 6-9, 2025 [civitan] County Fair Booth
    ");
}

// =============================================================================
// Month grid
// =============================================================================

#[test]
fn golden_month_august() {
    let directory = directory();
    let grid = MonthGrid::build(&directory, 2025, 8).unwrap();

    let expected = [
        "August 2025",
        "Su  Mo  Tu  We  Th  Fr  Sa",
        "                     1   2",
        " 3I  4   5   6C  7C  8C  9C",
        "10  11  12  13  14  15  16",
        "17  18  19  20  21  22  23",
        "24  25  26  27  28  29  30",
        "31",
        "",
        "Aug 3 I International Friendship Day",
        "Aug 6 C County Fair Booth",
        "Aug 7 C County Fair Booth",
        "Aug 8 C County Fair Booth",
        "Aug 9 C County Fair Booth",
    ]
    .join("\n");

    assert_eq!(format_month(&grid), expected);
}

#[test]
fn golden_month_without_events() {
    let directory = directory();
    let grid = MonthGrid::build(&directory, 2025, 2).unwrap();

    let expected = [
        "February 2025",
        "Su  Mo  Tu  We  Th  Fr  Sa",
        "                         1",
        " 2   3   4   5   6   7   8",
        " 9  10  11  12  13  14  15",
        "16  17  18  19  20  21  22",
        "23  24  25  26  27  28",
    ]
    .join("\n");

    assert_eq!(format_month(&grid), expected);
}

//! Terminal formatting for transcript entries and catalog records

use campus_types::{Booking, ChatMessage, Event, Facility, Role};
use colored::Colorize;

/// "HH:MM" like the chat bubbles in the web client
pub fn format_time(message: &ChatMessage) -> String {
    message.sent_at().format("%H:%M").to_string()
}

pub fn format_message(message: &ChatMessage) -> String {
    let label = match message.role() {
        Role::User => "You:".bright_green().bold(),
        Role::Assistant => "Assistant:".bright_blue().bold(),
    };
    format!(
        "{} {} {}",
        format!("[{}]", format_time(message)).bright_black(),
        label,
        message.text()
    )
}

fn push_line(out: &mut String, icon: &str, text: &str) {
    if !text.trim().is_empty() {
        out.push_str(&format!("  {} {}\n", icon, text));
    }
}

fn time_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{} - {}", start, end),
        (false, true) => start.to_string(),
        _ => String::new(),
    }
}

fn when(date: &str, start: &str, end: &str) -> String {
    let range = time_range(start, end);
    match (date.is_empty(), range.is_empty()) {
        (false, false) => format!("{}  {}", date, range),
        (false, true) => date.to_string(),
        (true, _) => range,
    }
}

pub fn format_event(event: &Event) -> String {
    let mut out = format!("{} {}", "●".bright_cyan(), event.name.bold());
    if !event.event_type.is_empty() {
        out.push_str(&format!("  [{}]", event.event_type).bright_magenta().to_string());
    }
    out.push('\n');

    push_line(&mut out, " ", &event.description);
    push_line(&mut out, "📅", &when(&event.date, &event.start_time, &event.end_time));
    push_line(&mut out, "📍", &event.location);
    if event.capacity > 0 {
        let seats = format!("{}/{} registered", event.registered_count, event.capacity);
        if event.is_full() {
            push_line(&mut out, "👥", &format!("{} (full)", seats).yellow().to_string());
        } else {
            push_line(&mut out, "👥", &seats);
        }
    }
    push_line(&mut out, "🎤", &event.organizer);
    if !event.tags.is_empty() {
        let tags: Vec<String> = event.tags.iter().map(|t| format!("#{}", t)).collect();
        push_line(&mut out, "🏷️", &tags.join(" ").bright_black().to_string());
    }
    out
}

pub fn format_facility(facility: &Facility) -> String {
    let status = if facility.status.is_empty() {
        String::new()
    } else if facility.is_available() {
        format!(" - {}", facility.status.green())
    } else {
        format!(" - {}", facility.status.yellow())
    };

    let mut out = format!("{} {}", "●".bright_cyan(), facility.name.bold());
    if !facility.facility_type.is_empty() {
        out.push_str(&format!(" ({})", facility.facility_type));
    }
    out.push_str(&status);
    out.push('\n');

    if !facility.building.is_empty() {
        push_line(&mut out, "🏢", &format!("{} - Floor {}", facility.building, facility.floor));
    }
    if facility.capacity > 0 {
        push_line(&mut out, "👥", &format!("Capacity: {}", facility.capacity));
    }
    push_line(&mut out, "✨", &facility.features.join(", "));
    for (days, hours) in &facility.operational_hours {
        push_line(&mut out, "🕐", &format!("{}: {}", days, hours));
    }
    out
}

pub fn format_booking(booking: &Booking) -> String {
    let title = if booking.resource_name.is_empty() {
        &booking.resource_id
    } else {
        &booking.resource_name
    };

    let mut out = format!("{} {}", "●".bright_cyan(), title.bold());
    if !booking.status.is_empty() {
        out.push_str(&format!(" [{}]", booking.status));
    }
    out.push('\n');

    push_line(&mut out, "📅", &when(&booking.date, &booking.start_time, &booking.end_time));
    push_line(&mut out, "📝", &booking.purpose);
    let who = match (booking.user_name.is_empty(), booking.user_email.is_empty()) {
        (false, false) => format!("{} <{}>", booking.user_name, booking.user_email),
        (false, true) => booking.user_name.clone(),
        (true, false) => booking.user_email.clone(),
        (true, true) => String::new(),
    };
    push_line(&mut out, "👤", &who);
    if let Some(confirmed_at) = &booking.confirmed_at {
        push_line(&mut out, "✅", &format!("Confirmed {}", confirmed_at));
    }
    out
}

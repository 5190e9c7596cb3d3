use crate::email::transport::EmailMessage;

use pl_core::{Notification, NotificationPriority};

/// Render a notification into the HTML and plain-text bodies handed to
/// the email transport. High and critical subjects carry an urgency
/// marker so they stand out in inboxes.
pub fn render_notification(notification: &Notification, recipients: &[String]) -> EmailMessage {
    let subject = if notification.priority >= NotificationPriority::High {
        format!("[URGENT] {}", notification.title)
    } else {
        notification.title.clone()
    };

    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>\n", notification.title));
    html.push_str(&format!(
        "<p><strong>Priority:</strong> {}</p>\n",
        notification.priority
    ));
    html.push_str(&format!("<p>{}</p>\n", notification.message));
    if let Some(data) = &notification.data {
        html.push_str("<table>\n");
        for (key, value) in data {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                key, value
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str(&format!(
        "<p><small>Sent {}</small></p>\n",
        notification.timestamp.to_rfc3339()
    ));

    let mut text = String::new();
    text.push_str(&format!("{}\n", notification.title));
    text.push_str(&format!("Priority: {}\n\n", notification.priority));
    text.push_str(&format!("{}\n", notification.message));
    if let Some(data) = &notification.data {
        text.push('\n');
        for (key, value) in data {
            text.push_str(&format!("{}: {}\n", key, value));
        }
    }
    text.push_str(&format!("\nSent {}\n", notification.timestamp.to_rfc3339()));

    EmailMessage {
        recipients: recipients.join(","),
        subject,
        html_body: html,
        text_body: text,
        priority: notification.priority,
    }
}

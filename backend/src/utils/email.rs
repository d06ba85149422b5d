use anyhow::Result;
use chrono_tz::Tz;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::models::LeaveRequest;
use crate::utils::time::display_sheet_date;
use crate::workflow::LeaveDecision;

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from_address: String,
    skip_send: bool,
    time_zone: Tz,
}

/// Subject and plain-text body of a decision e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDecisionEmail {
    pub subject: &'static str,
    pub body: String,
}

impl EmailService {
    pub fn new(config: &SmtpConfig, time_zone: Tz) -> Result<Self> {
        let mailer = if config.username.is_empty() {
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            let creds = Credentials::new(config.username.clone(), config.password.clone());
            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            skip_send: config.skip_send,
            time_zone,
        })
    }

    pub fn compose_leave_decision(
        &self,
        request: &LeaveRequest,
        decision: LeaveDecision,
    ) -> LeaveDecisionEmail {
        let (subject, verb) = match decision {
            LeaveDecision::Approve => ("Leave Approved", "approved"),
            LeaveDecision::Reject => ("Leave Request Rejected", "rejected"),
        };
        let body = format!(
            "Dear {},\n\nYour leave request has been {}.\nStart Date: {}\nEnd Date: {}\n\nThank you,\nYour HR Team",
            request.full_name.trim(),
            verb,
            display_sheet_date(&request.start_date, &self.time_zone),
            display_sheet_date(&request.end_date, &self.time_zone),
        );
        LeaveDecisionEmail { subject, body }
    }

    /// Sends the decision e-mail to the applicant. Blocking; callers on the
    /// runtime go through `spawn_blocking`.
    pub fn send_leave_decision(&self, request: &LeaveRequest, decision: LeaveDecision) -> Result<()> {
        if self.skip_send {
            return Ok(());
        }
        let content = self.compose_leave_decision(request, decision);
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(request.email_address.trim().parse()?)
            .subject(content.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(content.body)?;

        self.mailer.send(&email)?;
        Ok(())
    }
}

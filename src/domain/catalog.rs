use std::fmt;

use serde::{Deserialize, Serialize};

/// What the email is trying to accomplish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Purpose {
    /// Ask how far along an ongoing piece of work is.
    #[default]
    #[serde(rename = "진행상황 확인")]
    ProgressCheck,
    /// Ask someone to carry out a task.
    #[serde(rename = "업무 처리 요청")]
    TaskRequest,
    /// Request documents or information.
    #[serde(rename = "자료/정보 요청")]
    InfoRequest,
    /// Coordinate a schedule.
    #[serde(rename = "일정 조율")]
    ScheduleCoordination,
    /// Request a decision or approval.
    #[serde(rename = "결정/승인 요청")]
    ApprovalRequest,
    /// Remind about an agreed follow-up action.
    #[serde(rename = "후속 조치 리마인드")]
    FollowUpReminder,
    /// Announce a delay.
    #[serde(rename = "지연 안내")]
    DelayNotice,
    /// Apologize and describe prevention measures.
    #[serde(rename = "사과 및 재발방지")]
    Apology,
    /// Request a meeting.
    #[serde(rename = "회의 요청")]
    MeetingRequest,
    /// Share information or make an announcement.
    #[serde(rename = "공유/공지")]
    Announcement,
}

impl Purpose {
    /// All purposes in display order.
    pub const ALL: [Purpose; 10] = [
        Purpose::ProgressCheck,
        Purpose::TaskRequest,
        Purpose::InfoRequest,
        Purpose::ScheduleCoordination,
        Purpose::ApprovalRequest,
        Purpose::FollowUpReminder,
        Purpose::DelayNotice,
        Purpose::Apology,
        Purpose::MeetingRequest,
        Purpose::Announcement,
    ];

    /// The Korean label emitted verbatim into the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Purpose::ProgressCheck => "진행상황 확인",
            Purpose::TaskRequest => "업무 처리 요청",
            Purpose::InfoRequest => "자료/정보 요청",
            Purpose::ScheduleCoordination => "일정 조율",
            Purpose::ApprovalRequest => "결정/승인 요청",
            Purpose::FollowUpReminder => "후속 조치 리마인드",
            Purpose::DelayNotice => "지연 안내",
            Purpose::Apology => "사과 및 재발방지",
            Purpose::MeetingRequest => "회의 요청",
            Purpose::Announcement => "공유/공지",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Purpose::ProgressCheck => "progress-check",
            Purpose::TaskRequest => "task-request",
            Purpose::InfoRequest => "info-request",
            Purpose::ScheduleCoordination => "schedule",
            Purpose::ApprovalRequest => "approval",
            Purpose::FollowUpReminder => "follow-up",
            Purpose::DelayNotice => "delay-notice",
            Purpose::Apology => "apology",
            Purpose::MeetingRequest => "meeting",
            Purpose::Announcement => "announcement",
        }
    }

    /// Parse a purpose from its slug or Korean label.
    pub fn from_input(input: &str) -> Option<Purpose> {
        let trimmed = input.trim();
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.key().eq_ignore_ascii_case(trimmed) || purpose.label() == trimmed)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tone of voice for the drafted email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "매우 공손")]
    VeryPolite,
    #[serde(rename = "공손")]
    Polite,
    #[serde(rename = "중립")]
    Neutral,
    #[serde(rename = "간결")]
    Concise,
    /// Firm but courteous.
    #[serde(rename = "단호하지만 예의있게")]
    FirmButCourteous,
}

impl Tone {
    /// All tones in display order.
    pub const ALL: [Tone; 5] =
        [Tone::VeryPolite, Tone::Polite, Tone::Neutral, Tone::Concise, Tone::FirmButCourteous];

    /// The Korean label emitted verbatim into the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::VeryPolite => "매우 공손",
            Tone::Polite => "공손",
            Tone::Neutral => "중립",
            Tone::Concise => "간결",
            Tone::FirmButCourteous => "단호하지만 예의있게",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Tone::VeryPolite => "very-polite",
            Tone::Polite => "polite",
            Tone::Neutral => "neutral",
            Tone::Concise => "concise",
            Tone::FirmButCourteous => "firm",
        }
    }

    /// Parse a tone from its slug or Korean label.
    pub fn from_input(input: &str) -> Option<Tone> {
        let trimmed = input.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.key().eq_ignore_ascii_case(trimmed) || tone.label() == trimmed)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Target length of the drafted email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Length {
    #[serde(rename = "짧게")]
    Short,
    /// The form seeds length with the middle value.
    #[default]
    #[serde(rename = "보통")]
    Normal,
    #[serde(rename = "자세히")]
    Detailed,
}

impl Length {
    /// All lengths in display order.
    pub const ALL: [Length; 3] = [Length::Short, Length::Normal, Length::Detailed];

    /// The Korean label emitted verbatim into the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Length::Short => "짧게",
            Length::Normal => "보통",
            Length::Detailed => "자세히",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Normal => "normal",
            Length::Detailed => "detailed",
        }
    }

    /// Parse a length from its slug or Korean label.
    pub fn from_input(input: &str) -> Option<Length> {
        let trimmed = input.trim();
        Length::ALL
            .into_iter()
            .find(|length| length.key().eq_ignore_ascii_case(trimmed) || length.label() == trimmed)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Who the email is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Audience {
    #[default]
    #[serde(rename = "동료")]
    Colleague,
    #[serde(rename = "상사")]
    Manager,
    #[serde(rename = "타부서")]
    OtherTeam,
    /// External customer or partner.
    #[serde(rename = "외부고객/파트너")]
    ExternalPartner,
    /// Multiple recipients including To/CC.
    #[serde(rename = "여러 명(To/CC 포함)")]
    Group,
}

impl Audience {
    /// All audiences in display order.
    pub const ALL: [Audience; 5] = [
        Audience::Colleague,
        Audience::Manager,
        Audience::OtherTeam,
        Audience::ExternalPartner,
        Audience::Group,
    ];

    /// The Korean label emitted verbatim into the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Colleague => "동료",
            Audience::Manager => "상사",
            Audience::OtherTeam => "타부서",
            Audience::ExternalPartner => "외부고객/파트너",
            Audience::Group => "여러 명(To/CC 포함)",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Audience::Colleague => "colleague",
            Audience::Manager => "manager",
            Audience::OtherTeam => "other-team",
            Audience::ExternalPartner => "external",
            Audience::Group => "group",
        }
    }

    /// Parse an audience from its slug or Korean label.
    pub fn from_input(input: &str) -> Option<Audience> {
        let trimmed = input.trim();
        Audience::ALL
            .into_iter()
            .find(|audience| {
                audience.key().eq_ignore_ascii_case(trimmed) || audience.label() == trimmed
            })
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Style of the requested subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubjectStyle {
    #[default]
    #[serde(rename = "요청")]
    Request,
    #[serde(rename = "확인")]
    Confirm,
    #[serde(rename = "공유")]
    Share,
    #[serde(rename = "공지")]
    Notice,
    #[serde(rename = "회의")]
    Meeting,
    #[serde(rename = "승인")]
    Approval,
    #[serde(rename = "후속")]
    FollowUp,
    #[serde(rename = "지연")]
    Delay,
    #[serde(rename = "사과")]
    Apology,
}

impl SubjectStyle {
    /// All subject styles in display order.
    pub const ALL: [SubjectStyle; 9] = [
        SubjectStyle::Request,
        SubjectStyle::Confirm,
        SubjectStyle::Share,
        SubjectStyle::Notice,
        SubjectStyle::Meeting,
        SubjectStyle::Approval,
        SubjectStyle::FollowUp,
        SubjectStyle::Delay,
        SubjectStyle::Apology,
    ];

    /// The Korean label emitted verbatim into the generated prompt.
    pub fn label(&self) -> &'static str {
        match self {
            SubjectStyle::Request => "요청",
            SubjectStyle::Confirm => "확인",
            SubjectStyle::Share => "공유",
            SubjectStyle::Notice => "공지",
            SubjectStyle::Meeting => "회의",
            SubjectStyle::Approval => "승인",
            SubjectStyle::FollowUp => "후속",
            SubjectStyle::Delay => "지연",
            SubjectStyle::Apology => "사과",
        }
    }

    /// ASCII slug accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SubjectStyle::Request => "request",
            SubjectStyle::Confirm => "confirm",
            SubjectStyle::Share => "share",
            SubjectStyle::Notice => "notice",
            SubjectStyle::Meeting => "meeting",
            SubjectStyle::Approval => "approval",
            SubjectStyle::FollowUp => "follow-up",
            SubjectStyle::Delay => "delay",
            SubjectStyle::Apology => "apology",
        }
    }

    /// Parse a subject style from its slug or Korean label.
    pub fn from_input(input: &str) -> Option<SubjectStyle> {
        let trimmed = input.trim();
        SubjectStyle::ALL
            .into_iter()
            .find(|style| style.key().eq_ignore_ascii_case(trimmed) || style.label() == trimmed)
    }
}

impl fmt::Display for SubjectStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

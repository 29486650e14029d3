// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease events emitted by state transitions

use crate::identity::Identity;
use chrono::{DateTime, Utc};

/// Something observable happened to the lease
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaseEvent {
    /// A free lease was taken
    Acquired {
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// The current holder extended its own lease
    Renewed {
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// A stale lease was taken over from an absent holder
    Reclaimed {
        previous_holder: Identity,
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// Someone else holds a fresh lease
    Denied {
        requester: Identity,
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// The holder cleared its lease
    Released { holder: Identity },
    /// Release found another identity recorded as holder
    Lost {
        requester: Identity,
        holder: Identity,
    },
}

impl LeaseEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LeaseEvent::Acquired { .. } => "lease:acquired",
            LeaseEvent::Renewed { .. } => "lease:renewed",
            LeaseEvent::Reclaimed { .. } => "lease:reclaimed",
            LeaseEvent::Denied { .. } => "lease:denied",
            LeaseEvent::Released { .. } => "lease:released",
            LeaseEvent::Lost { .. } => "lease:lost",
        }
    }

    /// Emit this event through `tracing` at a level matching its severity
    pub fn log(&self) {
        match self {
            LeaseEvent::Acquired { holder, expiry } => {
                tracing::info!(event = self.name(), %holder, %expiry, "lease acquired")
            }
            LeaseEvent::Renewed { holder, expiry } => {
                tracing::info!(event = self.name(), %holder, %expiry, "lease renewed")
            }
            LeaseEvent::Reclaimed {
                previous_holder,
                holder,
                expiry,
            } => tracing::info!(
                event = self.name(),
                %previous_holder,
                %holder,
                %expiry,
                "stale lease reclaimed"
            ),
            LeaseEvent::Denied {
                requester,
                holder,
                expiry,
            } => tracing::debug!(
                event = self.name(),
                %requester,
                %holder,
                %expiry,
                "lease held elsewhere"
            ),
            LeaseEvent::Released { holder } => {
                tracing::info!(event = self.name(), %holder, "lease released")
            }
            LeaseEvent::Lost { requester, holder } => tracing::warn!(
                event = self.name(),
                %requester,
                %holder,
                "lease was taken over before release"
            ),
        }
    }
}

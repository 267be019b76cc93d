// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

use tapo::ApiClient;
use tapo::ColorLightHandler;
use tapo::responses::DeviceInfoColorLightResult;
use tracing::debug;

use crate::action::BulbAction;
use crate::credentials::Credentials;
use crate::error::Result;

/// One authenticated session to a Tapo color bulb (L530 class), plus the
/// device state captured at connect time.
///
/// The protocol handshake, encryption, and session transport are handled by
/// the `tapo` crate; this type only drives the three high-level operations
/// the control loop needs.
pub struct Bulb {
    host: String,
    handler: ColorLightHandler,
    info: DeviceInfoColorLightResult,
}

impl Bulb {
    /// Open a session to the bulb at `host` and perform one state refresh.
    ///
    /// The refreshed state is what [`apply`](Self::apply) resolves a toggle
    /// against.
    pub async fn connect(credentials: &Credentials, host: &str) -> Result<Self> {
        let handler = ApiClient::new(credentials.username(), credentials.password())
            .l530(host)
            .await?;
        let info = handler.get_device_info().await?;
        debug!("Session established with {host}");
        Ok(Self {
            host: host.to_string(),
            handler,
            info,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the bulb reported itself on at connect time.
    pub fn is_on(&self) -> bool {
        self.info.device_on
    }

    /// Nickname the bulb was given in the Tapo app.
    pub fn nickname(&self) -> &str {
        &self.info.nickname
    }

    /// Drive the bulb to the given power state.
    pub async fn switch(&self, on: bool) -> Result<()> {
        if on {
            self.handler.on().await?;
        } else {
            self.handler.off().await?;
        }
        Ok(())
    }

    /// Apply an action, resolving a toggle against the connect-time state.
    pub async fn apply(&self, action: BulbAction) -> Result<()> {
        self.switch(action.target_state(self.is_on())).await
    }
}

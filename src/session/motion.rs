//! Motion and lighting commands
//!
//! Fire-and-forget imperatives with fixed parameters: one or two client
//! calls, a status line, then a pacing delay. Client failures propagate.

use std::time::Duration;

use super::Session;
use crate::robot::{LightColor, RobotClient};
use crate::Result;

/// Wheel speed for all drive commands, mm/s
const DRIVE_SPEED: f32 = 50.0;

/// Motion window for forward and backward driving
const DRIVE_DURATION: Duration = Duration::from_secs(2);

/// Motion window for in-place turns
const TURN_DURATION: Duration = Duration::from_secs(1);

/// Pacing delay after motor and lighting commands
const COMMAND_DELAY: Duration = Duration::from_secs(2);

/// Pacing delay for the celebration animation
const CELEBRATE_DELAY: Duration = Duration::from_secs(8);

/// Preloaded greeting animation played by `celebrate`
const CELEBRATE_ANIMATION: &str = "anim_greeting_happy_03";

impl<C: RobotClient> Session<C> {
    /// Drive forward for two seconds
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn drive_forward(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("moving forward");
        self.client
            .drive_wheels(DRIVE_SPEED, DRIVE_SPEED, DRIVE_DURATION)
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Drive backward for two seconds
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::drive_forward`]
    pub async fn drive_backward(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("moving backward");
        self.client
            .drive_wheels(-DRIVE_SPEED, -DRIVE_SPEED, DRIVE_DURATION)
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Turn left in place
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn turn_left(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("turning left");
        self.client
            .drive_wheels(-DRIVE_SPEED, DRIVE_SPEED, TURN_DURATION)
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Turn right in place
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::turn_left`]
    pub async fn turn_right(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("turning right");
        self.client
            .drive_wheels(DRIVE_SPEED, -DRIVE_SPEED, TURN_DURATION)
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Switch all five backpack segments to green
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn lights_on(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("backpack lights on");
        self.client
            .set_backpack_lights([LightColor::GREEN; 5])
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Switch all five backpack segments off
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::lights_on`]
    pub async fn lights_off(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("backpack lights off");
        self.client
            .set_backpack_lights([LightColor::OFF; 5])
            .await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Raise the head to the midpoint angle so the display faces a viewer
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn head_up(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("head up");
        let angle = self.client.head_limits().midpoint();
        self.client.set_head_angle(angle).await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Lower the head fully
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::head_up`]
    pub async fn head_down(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("head down");
        let angle = self.client.head_limits().min_radians;
        self.client.set_head_angle(angle).await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Raise the lift fully
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn lift_up(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("lift up");
        let height = self.client.lift_limits().max_mm;
        self.client.set_lift_height(height).await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Lower the lift fully
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::lift_up`]
    pub async fn lift_down(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("lift down");
        let height = self.client.lift_limits().min_mm;
        self.client.set_lift_height(height).await?;
        self.pace(Some(COMMAND_DELAY)).await;
        Ok(())
    }

    /// Play the preloaded greeting animation
    ///
    /// # Errors
    ///
    /// Returns error if the session is not open or the client call fails
    pub async fn celebrate(&mut self) -> Result<()> {
        self.ensure_open()?;
        tracing::info!("celebrating");
        self.client.play_animation(CELEBRATE_ANIMATION).await?;
        self.pace(Some(CELEBRATE_DELAY)).await;
        Ok(())
    }
}

use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::User;

impl Entity for User {
    type Id = String;
    type CreateParams = Infallible;
    type Patch = Infallible;
    type Action = Infallible;
    type ActionResult = ();

    const NAME: &'static str = "user";

    fn id(&self) -> &String {
        &self.id
    }

    /// Users only enter the store through seeding; no creation payload exists.
    fn from_create_params(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), String> {
        match patch {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), String> {
        match action {}
    }
}

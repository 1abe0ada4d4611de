//! [`ActorEntity`] implementation for [`Menu`].
//!
//! The create payload is the unsaved menu itself. `on_create` finishes it: the menu id
//! and the line ids are stamped onto every line.

use crate::domain::PosError;
use crate::menu_actor::LineSequence;
use crate::model::{Menu, MenuId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = Menu;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = LineSequence;
    type Error = PosError;

    fn from_create_params(id: MenuId, params: Menu) -> Result<Self, Self::Error> {
        Ok(Menu {
            id: Some(id),
            ..params
        })
    }

    async fn on_create(&mut self, lines: &LineSequence) -> Result<(), Self::Error> {
        let menu_id = self.id;
        for line in &mut self.lines {
            line.seq = Some(lines.next());
            line.menu_id = menu_id;
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &LineSequence) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &LineSequence) -> Result<(), Self::Error> {
        Ok(())
    }
}

use crate::domain::PosError;
use crate::model::{MenuGroup, MenuGroupCreate, MenuGroupId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuGroup {
    type Id = MenuGroupId;
    type Create = MenuGroupCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = PosError;

    fn from_create_params(id: MenuGroupId, params: MenuGroupCreate) -> Result<Self, Self::Error> {
        Ok(MenuGroup::new(id, params.name))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

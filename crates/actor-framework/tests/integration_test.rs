use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct DiningTable {
    id: u32,
    guests: u32,
    occupied: bool,
}

#[derive(Debug)]
struct DiningTableCreate {
    guests: u32,
}

#[derive(Debug)]
struct DiningTableUpdate {
    guests: Option<u32>,
}

#[derive(Debug)]
enum DiningTableAction {
    Seat,
    #[allow(dead_code)]
    Clear,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum DiningTableError {
    #[error("table has no seats")]
    NoSeats,
}

#[async_trait]
impl ActorEntity for DiningTable {
    type Id = u32;
    type Create = DiningTableCreate;
    type Update = DiningTableUpdate;
    type Action = DiningTableAction;
    type ActionResult = bool;
    type Context = ();
    type Error = DiningTableError;

    fn from_create_params(id: u32, params: DiningTableCreate) -> Result<Self, Self::Error> {
        if params.guests == 0 {
            return Err(DiningTableError::NoSeats);
        }
        Ok(Self {
            id,
            guests: params.guests,
            occupied: false,
        })
    }

    async fn on_update(
        &mut self,
        update: DiningTableUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(guests) = update.guests {
            self.guests = guests;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DiningTableAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            DiningTableAction::Seat => {
                if self.occupied {
                    Ok(false)
                } else {
                    self.occupied = true;
                    Ok(true)
                }
            }
            DiningTableAction::Clear => {
                self.occupied = false;
                Ok(true)
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<DiningTable>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(DiningTableCreate { guests: 4 }).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action: seat guests
    let changed: bool = client
        .perform_action(id, DiningTableAction::Seat)
        .await
        .unwrap();
    assert!(changed);

    let table: DiningTable = client.get(id).await.unwrap().unwrap();
    assert!(table.occupied);

    // 3. Seating twice reports no change
    let changed_again: bool = client
        .perform_action(id, DiningTableAction::Seat)
        .await
        .unwrap();
    assert!(!changed_again);

    // 4. Update
    let updated = client
        .update(id, DiningTableUpdate { guests: Some(6) })
        .await
        .unwrap();
    assert_eq!(updated.guests, 6);

    // 5. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_returns_entities_in_id_order() {
    let (actor, client) = ResourceActor::<DiningTable>::new(10);
    tokio::spawn(actor.run(()));

    for guests in [2, 4, 6] {
        client.create(DiningTableCreate { guests }).await.unwrap();
    }

    let tables = client.list().await.unwrap();
    let ids: Vec<u32> = tables.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(tables[2].guests, 6);
}

#[tokio::test]
async fn test_rejected_create_is_not_stored_and_error_is_recoverable() {
    let (actor, client) = ResourceActor::<DiningTable>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .create(DiningTableCreate { guests: 0 })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<DiningTableError>().unwrap(),
        DiningTableError::NoSeats
    );

    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_of_missing_entity_is_not_found() {
    let (actor, client) = ResourceActor::<DiningTable>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.update(42, DiningTableUpdate { guests: None }).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
}

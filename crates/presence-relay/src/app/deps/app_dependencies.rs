// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::connection::services::ConnectionService;
use crate::domain::contacts::services::ContactListService;
use crate::domain::messaging::services::MessagingService;

pub type DynConnectionService = Arc<dyn ConnectionService>;
pub type DynContactListService = Arc<dyn ContactListService>;
pub type DynMessagingService = Arc<dyn MessagingService>;

/// The collaborators through which the relay talks to the outside world.
#[derive(Clone)]
pub struct AppDependencies {
    pub connection_service: DynConnectionService,
    pub contact_list_service: DynContactListService,
    pub messaging_service: DynMessagingService,
}

//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table (`room_statuses`, `reservation_statuses`,
//! `payment_methods`).

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in seed order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Resolve a database ID back into a variant.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Lookup-table `name` column for this variant.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_status_enum! {
    /// Housekeeping state of a room.
    RoomStatus {
        Available = 1 => "available",
        Occupied = 2 => "occupied",
        Maintenance = 3 => "maintenance",
        Cleaning = 4 => "cleaning",
        Reserved = 5 => "reserved",
    }
}

define_status_enum! {
    /// Reservation lifecycle status.
    ReservationStatus {
        Pending = 1 => "pending",
        Active = 2 => "active",
        Completed = 3 => "completed",
        Cancelled = 4 => "cancelled",
    }
}

define_status_enum! {
    /// How a payment was settled.
    PaymentMethod {
        Cash = 1 => "cash",
        CreditCard = 2 => "credit_card",
        BankTransfer = 3 => "bank_transfer",
        VirtualPos = 4 => "virtual_pos",
    }
}

impl ReservationStatus {
    /// Statuses that hold a room for their dates.
    pub const BLOCKING: &'static [ReservationStatus] =
        &[ReservationStatus::Pending, ReservationStatus::Active];

    /// Whether a reservation in this status prevents other bookings on the
    /// same room and dates.
    pub fn blocks_availability(self) -> bool {
        Self::BLOCKING.contains(&self)
    }

    /// Room status to apply after a reservation moves into this status.
    ///
    /// Completed and cancelled stays free the room; anything else holds it.
    pub fn room_status_after(self) -> RoomStatus {
        match self {
            ReservationStatus::Completed | ReservationStatus::Cancelled => RoomStatus::Available,
            ReservationStatus::Pending | ReservationStatus::Active => RoomStatus::Occupied,
        }
    }
}

/// Blocking reservation status IDs, ready to bind as a SQL array parameter.
pub fn blocking_reservation_status_ids() -> Vec<StatusId> {
    ReservationStatus::BLOCKING.iter().map(|s| s.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_seed_order() {
        assert_eq!(RoomStatus::Available.id(), 1);
        assert_eq!(RoomStatus::Reserved.id(), 5);
        assert_eq!(ReservationStatus::Pending.id(), 1);
        assert_eq!(ReservationStatus::Cancelled.id(), 4);
        assert_eq!(PaymentMethod::VirtualPos.id(), 4);
    }

    #[test]
    fn from_id_round_trips_every_variant() {
        for status in ReservationStatus::ALL {
            assert_eq!(ReservationStatus::from_id(status.id()), Some(*status));
        }
        assert_eq!(RoomStatus::from_id(0), None);
        assert_eq!(PaymentMethod::from_id(9), None);
    }

    #[test]
    fn only_pending_and_active_block() {
        assert!(ReservationStatus::Pending.blocks_availability());
        assert!(ReservationStatus::Active.blocks_availability());
        assert!(!ReservationStatus::Completed.blocks_availability());
        assert!(!ReservationStatus::Cancelled.blocks_availability());
        assert_eq!(blocking_reservation_status_ids(), vec![1, 2]);
    }

    #[test]
    fn terminal_statuses_free_the_room() {
        assert_eq!(
            ReservationStatus::Cancelled.room_status_after(),
            RoomStatus::Available
        );
        assert_eq!(
            ReservationStatus::Completed.room_status_after(),
            RoomStatus::Available
        );
        assert_eq!(
            ReservationStatus::Active.room_status_after(),
            RoomStatus::Occupied
        );
    }
}

//! Cluster administration commands
//!
//! These talk to the single node behind the pool; no slot routing happens here.

use super::Client;
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// CLUSTER SLOTS
    pub async fn cluster_slots<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("SLOTS")).await
    }

    /// CLUSTER NODES
    pub async fn cluster_nodes<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("NODES")).await
    }

    /// CLUSTER MEET ip port
    pub async fn cluster_meet<RV: FromRedisValue>(&self, host: &str, port: u16) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("MEET").arg(host).arg(port)).await
    }

    /// CLUSTER FORGET node-id
    pub async fn cluster_forget<RV: FromRedisValue>(&self, node_id: &str) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("FORGET").arg(node_id)).await
    }

    /// CLUSTER REPLICATE node-id
    pub async fn cluster_replicate<RV: FromRedisValue>(&self, node_id: &str) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("REPLICATE").arg(node_id)).await
    }

    /// CLUSTER RESET SOFT
    pub async fn cluster_reset_soft<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("RESET").arg("SOFT")).await
    }

    /// CLUSTER RESET HARD
    pub async fn cluster_reset_hard<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("RESET").arg("HARD")).await
    }

    /// CLUSTER INFO
    pub async fn cluster_info<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("INFO")).await
    }

    /// CLUSTER KEYSLOT key
    pub async fn cluster_keyslot<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("KEYSLOT").arg(key)).await
    }

    /// CLUSTER GETKEYSINSLOT slot count
    pub async fn cluster_get_keys_in_slot<RV: FromRedisValue>(&self, slot: u16, count: usize) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("GETKEYSINSLOT").arg(slot).arg(count))
            .await
    }

    /// CLUSTER COUNT-FAILURE-REPORTS node-id
    pub async fn cluster_count_failure_reports<RV: FromRedisValue>(&self, node_id: &str) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("COUNT-FAILURE-REPORTS").arg(node_id))
            .await
    }

    /// CLUSTER COUNTKEYSINSLOT slot
    pub async fn cluster_count_keys_in_slot<RV: FromRedisValue>(&self, slot: u16) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("COUNTKEYSINSLOT").arg(slot)).await
    }

    /// CLUSTER DELSLOTS slot [slot ...]
    pub async fn cluster_del_slots<RV: FromRedisValue>(&self, slots: &[u16]) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("DELSLOTS").arg(slots)).await
    }

    /// CLUSTER DELSLOTSRANGE start end
    pub async fn cluster_del_slots_range<RV: FromRedisValue>(&self, start: u16, end: u16) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("DELSLOTSRANGE").arg(start).arg(end))
            .await
    }

    /// CLUSTER SAVECONFIG
    pub async fn cluster_save_config<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("SAVECONFIG")).await
    }

    /// CLUSTER REPLICAS node-id
    pub async fn cluster_replicas<RV: FromRedisValue>(&self, node_id: &str) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("REPLICAS").arg(node_id)).await
    }

    /// CLUSTER FAILOVER
    pub async fn cluster_failover<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("FAILOVER")).await
    }

    /// CLUSTER ADDSLOTS slot [slot ...]
    pub async fn cluster_add_slots<RV: FromRedisValue>(&self, slots: &[u16]) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("ADDSLOTS").arg(slots)).await
    }

    /// CLUSTER ADDSLOTSRANGE start end
    pub async fn cluster_add_slots_range<RV: FromRedisValue>(&self, start: u16, end: u16) -> Result<RV> {
        self.query(cmd("CLUSTER").arg("ADDSLOTSRANGE").arg(start).arg(end))
            .await
    }
}

//! Command set of the wallet's RPC interface.
//!
//! Generated for Gridcoin 5.4.5, grouped the way the wallet groups its own
//! command registrations. The set is closed for a given release: dispatching
//! a name outside it fails before any transport interaction. Regenerate this
//! module (and [`crate::RpcErrorKind`]) together when targeting a different
//! wallet version.

/// Expands a callback macro once with the full `"wire-name" => fn_ident` list.
///
/// Both client flavors derive their per-command wrapper methods from this
/// single list, and [`COMMANDS`] is derived from it too, so the membership
/// table and the wrappers cannot drift apart. The one wire name that is also
/// a Rust keyword (`move`) carries a raw identifier.
macro_rules! for_each_command {
    ($expand:ident) => {
        $expand! {
            // Wallet
            "help" => help,
            "addmultisigaddress" => addmultisigaddress,
            "addredeemscript" => addredeemscript,
            "backupprivatekeys" => backupprivatekeys,
            "backupwallet" => backupwallet,
            "burn" => burn,
            "checkwallet" => checkwallet,
            "createrawtransaction" => createrawtransaction,
            "consolidatemsunspent" => consolidatemsunspent,
            "decoderawtransaction" => decoderawtransaction,
            "decodescript" => decodescript,
            "dumpprivkey" => dumpprivkey,
            "dumpwallet" => dumpwallet,
            "encryptwallet" => encryptwallet,
            "getaccount" => getaccount,
            "getaccountaddress" => getaccountaddress,
            "getaddressesbyaccount" => getaddressesbyaccount,
            "getbalance" => getbalance,
            "getbalancedetail" => getbalancedetail,
            "getnewaddress" => getnewaddress,
            "getnewpubkey" => getnewpubkey,
            "getrawtransaction" => getrawtransaction,
            "getrawwallettransaction" => getrawwallettransaction,
            "getreceivedbyaccount" => getreceivedbyaccount,
            "getreceivedbyaddress" => getreceivedbyaddress,
            "gettransaction" => gettransaction,
            "getunconfirmedbalance" => getunconfirmedbalance,
            "getwalletinfo" => getwalletinfo,
            "importprivkey" => importprivkey,
            "importwallet" => importwallet,
            "keypoolrefill" => keypoolrefill,
            "listaccounts" => listaccounts,
            "listaddressgroupings" => listaddressgroupings,
            "listreceivedbyaccount" => listreceivedbyaccount,
            "listreceivedbyaddress" => listreceivedbyaddress,
            "listsinceblock" => listsinceblock,
            "liststakes" => liststakes,
            "listtransactions" => listtransactions,
            "listunspent" => listunspent,
            "consolidateunspent" => consolidateunspent,
            "makekeypair" => makekeypair,
            "maintainbackups" => maintainbackups,
            "move" => r#move,
            "rainbymagnitude" => rainbymagnitude,
            "repairwallet" => repairwallet,
            "resendtx" => resendtx,
            "reservebalance" => reservebalance,
            "scanforunspent" => scanforunspent,
            "sendfrom" => sendfrom,
            "sendmany" => sendmany,
            "sendrawtransaction" => sendrawtransaction,
            "sendtoaddress" => sendtoaddress,
            "setaccount" => setaccount,
            "sethdseed" => sethdseed,
            "settxfee" => settxfee,
            "signmessage" => signmessage,
            "signrawtransaction" => signrawtransaction,
            "upgradewallet" => upgradewallet,
            "validateaddress" => validateaddress,
            "validatepubkey" => validatepubkey,
            "verifymessage" => verifymessage,
            "walletlock" => walletlock,
            "walletpassphrase" => walletpassphrase,
            "walletpassphrasechange" => walletpassphrasechange,
            "walletdiagnose" => walletdiagnose,
            // Researcher / beacon
            "advertisebeacon" => advertisebeacon,
            "beaconconvergence" => beaconconvergence,
            "beaconreport" => beaconreport,
            "beaconstatus" => beaconstatus,
            "createmrcrequest" => createmrcrequest,
            "explainmagnitude" => explainmagnitude,
            "getlaststake" => getlaststake,
            "getmrcinfo" => getmrcinfo,
            "getstakinginfo" => getstakinginfo,
            "getmininginfo" => getmininginfo,
            "lifetime" => lifetime,
            "magnitude" => magnitude,
            "pendingbeaconreport" => pendingbeaconreport,
            "resetcpids" => resetcpids,
            "revokebeacon" => revokebeacon,
            "superblockage" => superblockage,
            "superblocks" => superblocks,
            "auditsnapshotaccrual" => auditsnapshotaccrual,
            "auditsnapshotaccruals" => auditsnapshotaccruals,
            // Developer diagnostics and data
            "addkey" => addkey,
            "changesettings" => changesettings,
            "currentcontractaverage" => currentcontractaverage,
            "debug" => debug,
            "dumpcontracts" => dumpcontracts,
            "exportstats1" => exportstats1,
            "getblockstats" => getblockstats,
            "getlistof" => getlistof,
            "getrecentblocks" => getrecentblocks,
            "inspectaccrualsnapshot" => inspectaccrualsnapshot,
            "listalerts" => listalerts,
            "listdata" => listdata,
            "listprojects" => listprojects,
            "listresearcheraccounts" => listresearcheraccounts,
            "listsettings" => listsettings,
            "logging" => logging,
            "network" => network,
            "parseaccrualsnapshotfile" => parseaccrualsnapshotfile,
            "parselegacysb" => parselegacysb,
            "projects" => projects,
            "readdata" => readdata,
            "reorganize" => reorganize,
            "sendalert" => sendalert,
            "sendalert2" => sendalert2,
            "sendblock" => sendblock,
            "superblockaverage" => superblockaverage,
            "versionreport" => versionreport,
            "writedata" => writedata,
            // Scraper
            "listmanifests" => listmanifests,
            "getmpart" => getmpart,
            "sendscraperfilemanifest" => sendscraperfilemanifest,
            "savescraperfilemanifest" => savescraperfilemanifest,
            "deletecscrapermanifest" => deletecscrapermanifest,
            "archivelog" => archivelog,
            "testnewsb" => testnewsb,
            "convergencereport" => convergencereport,
            "scraperreport" => scraperreport,
            // Network and blockchain
            "addnode" => addnode,
            "askforoutstandingblocks" => askforoutstandingblocks,
            "getblockchaininfo" => getblockchaininfo,
            "getnetworkinfo" => getnetworkinfo,
            "clearbanned" => clearbanned,
            "currenttime" => currenttime,
            "getaddednodeinfo" => getaddednodeinfo,
            "getnodeaddresses" => getnodeaddresses,
            "getbestblockhash" => getbestblockhash,
            "getblock" => getblock,
            "getblockbynumber" => getblockbynumber,
            "getblockbymintime" => getblockbymintime,
            "getblocksbatch" => getblocksbatch,
            "getblockcount" => getblockcount,
            "getblockhash" => getblockhash,
            "getburnreport" => getburnreport,
            "getcheckpoint" => getcheckpoint,
            "getconnectioncount" => getconnectioncount,
            "getdifficulty" => getdifficulty,
            "getinfo" => getinfo,
            "getnettotals" => getnettotals,
            "getpeerinfo" => getpeerinfo,
            "getrawmempool" => getrawmempool,
            "listbanned" => listbanned,
            "networktime" => networktime,
            "ping" => ping,
            "setban" => setban,
            "showblock" => showblock,
            "stop" => stop,
            // Voting
            "addpoll" => addpoll,
            "getpollresults" => getpollresults,
            "getvotingclaim" => getvotingclaim,
            "listpolls" => listpolls,
            "vote" => vote,
            "votebyid" => votebyid,
            "votedetails" => votedetails,
        }
    };
}
pub(crate) use for_each_command;

macro_rules! command_table {
    ($($method:literal => $fn:ident,)+) => {
        /// Every RPC command name the targeted wallet release accepts.
        pub const COMMANDS: &[&str] = &[$($method,)+];
    };
}
for_each_command!(command_table);

/// Membership check backing the pre-dispatch validation in both clients.
pub(crate) fn is_command(method: &str) -> bool {
    COMMANDS.contains(&method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_unique() {
        for (i, method) in COMMANDS.iter().enumerate() {
            for other in &COMMANDS[i + 1..] {
                assert_ne!(method, other, "duplicate command `{method}`");
            }
        }
    }

    #[test]
    fn known_names_are_members() {
        assert!(is_command("getblockcount"));
        assert!(is_command("help"));
        assert!(is_command("move"));
        assert!(is_command("votedetails"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(!is_command("getblockcount2"));
        assert!(!is_command(""));
        assert!(!is_command("GETBLOCKCOUNT"));
    }
}
